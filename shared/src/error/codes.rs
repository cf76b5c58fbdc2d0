//! Error codes for the pricing service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 6xxx: Pricing / tariff errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Represented as u16 values on the wire so the console can switch on them
/// without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Invalid request
    InvalidRequest = 5,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 6xxx: Pricing ====================
    /// Tariff constants failed validation
    TariffInvalid = 6001,
    /// No tariff is effective on the requested date
    TariffNotFound = 6002,
    /// Batch contained no rows
    BatchEmpty = 6003,
    /// Batch exceeded the configured row limit
    BatchTooLarge = 6004,

    // ==================== 9xxx: System ====================
    /// Configuration error
    ConfigError = 9003,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// System errors are logged when turned into a response
    #[inline]
    pub const fn is_system(&self) -> bool {
        matches!(self, ErrorCode::ConfigError)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            ErrorCode::TariffInvalid => "Tariff configuration is invalid",
            ErrorCode::TariffNotFound => "No tariff is effective on the requested date",
            ErrorCode::BatchEmpty => "Batch contains no rows",
            ErrorCode::BatchTooLarge => "Batch exceeds the row limit",

            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ErrorCode::Success),
            5 => Ok(ErrorCode::InvalidRequest),
            8 => Ok(ErrorCode::ValueOutOfRange),

            6001 => Ok(ErrorCode::TariffInvalid),
            6002 => Ok(ErrorCode::TariffNotFound),
            6003 => Ok(ErrorCode::BatchEmpty),
            6004 => Ok(ErrorCode::BatchTooLarge),

            9003 => Ok(ErrorCode::ConfigError),

            other => Err(InvalidErrorCode(other)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
