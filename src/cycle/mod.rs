//! Study cycle module

pub mod flatten;
pub mod models;

pub use flatten::flatten_cycle;
pub use models::*;
