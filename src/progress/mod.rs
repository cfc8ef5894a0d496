//! Learner progress module

pub mod models;
pub mod reviews;
pub mod storage;

pub use models::*;
pub use storage::{ProgressStorage, ProgressStorageError};
