pub mod park;
pub mod trail;
pub mod user;
