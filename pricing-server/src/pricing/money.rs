//! Money conversions
//!
//! Amounts travel as `f64` and are computed as `Decimal`. Conversion in is
//! lossless for anything a user can type; conversion out rounds.

use rust_decimal::prelude::*;

/// Money is rounded to 2 decimal places, half away from zero
pub const DECIMAL_PLACES: u32 = 2;

/// Ratios (profit rate / margin) keep 4 decimal places
pub const RATIO_DECIMAL_PLACES: u32 = 4;

/// Largest difference treated as equal when comparing money
pub const MONEY_TOLERANCE: f64 = 0.01;

/// Convert f64 to Decimal for calculation
///
/// NaN and infinities read as 0.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    if !value.is_finite() {
        return Decimal::ZERO;
    }
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round_money(value).to_f64().unwrap_or_default()
}

/// Convert a ratio back to f64, rounded to 4 decimal places
#[inline]
pub fn ratio_to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(RATIO_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// `rate` percent as a fraction (20 → 0.2)
#[inline]
pub fn percent(rate: f64) -> Decimal {
    to_decimal(rate) / Decimal::ONE_HUNDRED
}

/// `numerator / denominator`, 0 when the denominator is 0
#[inline]
pub fn ratio_or_zero(numerator: Decimal, denominator: Decimal) -> Decimal {
    numerator.checked_div(denominator).unwrap_or(Decimal::ZERO)
}
