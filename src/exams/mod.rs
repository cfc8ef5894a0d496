//! Mock exam module

pub mod models;

pub use models::*;
