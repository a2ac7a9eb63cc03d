//! Database Models

pub mod cafe;

pub use cafe::{Cafe, CafeCreate};
