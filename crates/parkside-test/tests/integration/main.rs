mod helpers;

mod account;
mod catalog;
