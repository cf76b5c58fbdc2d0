//! Unified error system
//!
//! - [`ErrorCode`]: Standardized numeric error codes
//! - [`AppError`]: Error type with code, message and details, rendered by axum
//! - [`ApiResponse`]: Unified API response envelope
//! - [`TariffError`]: Tariff loading / validation failures
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 6xxx: Pricing / tariff errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{ApiResponse, AppError, ErrorCode};
//!
//! let err = AppError::invalid_request("sale_price must be a number")
//!     .with_detail("field", "sale_price");
//! assert_eq!(err.code, ErrorCode::InvalidRequest);
//!
//! let response = ApiResponse::<()>::error(&err);
//! assert_eq!(response.code, Some(5));
//! ```

mod codes;
mod http;
mod tariff;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use tariff::{TariffError, TariffResult};
pub use types::{ApiResponse, AppError, AppResult};
