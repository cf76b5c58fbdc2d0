//! Shared types for the pricing workspace
//!
//! Data model, error types and the API response envelope used by the
//! engine and by any client talking to the pricing service.

pub mod error;
pub mod models;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use http;
pub use serde::{Deserialize, Serialize};
