//! Tariff configuration errors
//!
//! Raised while loading or validating tariff constants. These are startup /
//! reload failures; the calculation engine itself never returns an error.

use super::codes::ErrorCode;
use super::types::AppError;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TariffError {
    #[error("shipping step table is empty")]
    EmptyShippingTable,

    #[error("shipping step {index} is not above the previous weight bound")]
    UnsortedShippingTable { index: usize },

    #[error("shipping step {index} costs less than the previous step")]
    DecreasingShippingCost { index: usize },

    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: f64 },

    #[error("tariff schedule contains no versions")]
    EmptySchedule,

    #[error("two tariff versions share the effective date {0}")]
    DuplicateVersion(NaiveDate),

    #[error("no tariff is effective on {0}")]
    NotEffective(NaiveDate),

    #[error("failed to read tariff file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse tariff file: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<TariffError> for AppError {
    fn from(err: TariffError) -> Self {
        let code = match &err {
            TariffError::NotEffective(_) => ErrorCode::TariffNotFound,
            TariffError::Io(_) => ErrorCode::ConfigError,
            _ => ErrorCode::TariffInvalid,
        };
        AppError::with_message(code, err.to_string())
    }
}

/// Result type for tariff loading and validation
pub type TariffResult<T> = Result<T, TariffError>;
