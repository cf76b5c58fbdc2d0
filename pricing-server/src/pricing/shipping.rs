//! Shipping cost resolution
//!
//! Maps dimensional weight (desi) to a shipping cost through the tariff's
//! step table, and decides whether the platform reimburses it.

use rust_decimal::Decimal;
use shared::models::ShippingStepTable;

use super::money::to_decimal;

/// Shipping cost for `weight`
///
/// First step whose bound is >= weight; the ceiling above every bound.
/// Zero, negative or non-finite weights use the smallest step.
pub fn resolve_shipping_cost(weight: f64, table: &ShippingStepTable) -> f64 {
    let weight = if weight.is_finite() && weight > 0.0 {
        weight
    } else {
        table.min_weight()
    };

    table
        .steps
        .iter()
        .find(|step| step.max_weight >= weight)
        .map(|step| step.cost)
        .unwrap_or(table.ceiling_cost)
}

/// Whether shipping support applies at `sale_price`
pub fn is_shipping_supported(sale_price: f64, threshold: f64) -> bool {
    is_supported_at(to_decimal(sale_price), to_decimal(threshold))
}

pub(crate) fn is_supported_at(sale_price: Decimal, threshold: Decimal) -> bool {
    sale_price >= threshold
}
