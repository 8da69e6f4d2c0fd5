//! Catalog operations over parks and trails.

pub mod dto;
pub mod park;
pub mod trail;
