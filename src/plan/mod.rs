//! Study plan and curriculum module

pub mod models;
pub mod storage;

pub use models::*;
pub use storage::{default_base_path, PlanStorage, PlanStorageError};
