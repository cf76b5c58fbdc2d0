//! Utilities - error re-exports and logging

pub mod error;
pub mod logger;

pub use error::{ApiResponse, AppError, AppResult, ErrorCode, ok};
