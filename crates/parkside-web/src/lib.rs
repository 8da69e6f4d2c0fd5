pub mod client;
pub mod error;
pub mod model;
pub mod pages;
pub mod session;
