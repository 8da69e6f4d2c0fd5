pub mod account;
pub mod auth;
pub mod catalog;
pub mod error;
