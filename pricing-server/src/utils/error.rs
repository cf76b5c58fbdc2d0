//! Unified error handling
//!
//! Handlers return [`AppResult`]; errors render as the shared
//! [`ApiResponse`] envelope with a numeric code.
//!
//! | range | category |
//! |-------|----------|
//! | 0xxx | request / validation |
//! | 6xxx | tariff and batch |
//! | 9xxx | system |
//!
//! ```ignore
//! Err(AppError::new(ErrorCode::BatchEmpty))
//!
//! Ok(ok(result))
//! ```

use axum::Json;
use serde::Serialize;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};

/// Create a successful response
pub fn ok<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse::success(data))
}
