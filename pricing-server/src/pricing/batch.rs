//! Batch evaluation
//!
//! Runs normalization and the forward calculation over every row of an
//! import. A bad row is reported in its [`BatchRow`], it never stops the
//! batch.

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use shared::models::{
    BatchReport, BatchRow, BatchSummary, CostFallback, CostSource, ProfitResult, RawProductRecord,
    TariffConstants,
};

use super::calculator::compute_profit;
use super::money::{to_decimal, to_f64};
use super::normalize::normalize_record;

/// Evaluate every row against one tariff
///
/// Each row is read as a [`RawProductRecord`] on its own. A row that is not
/// an object, or names the same field twice under different spellings, comes
/// back with `error` set and no profit.
pub fn evaluate_batch(
    rows: &[Value],
    tariff: &TariffConstants,
    fallback: CostFallback,
) -> BatchReport {
    let mut summary = BatchSummary {
        rows: rows.len(),
        ..Default::default()
    };
    let mut total_profit = Decimal::ZERO;

    let rows: Vec<BatchRow> = rows
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let raw = match RawProductRecord::deserialize(value) {
                Ok(raw) => raw,
                Err(e) => {
                    tracing::debug!(index, error = %e, "Unreadable batch row");
                    summary.invalid += 1;
                    return invalid_row(index, value, e.to_string());
                }
            };

            let normalized = normalize_record(&raw, tariff, fallback);
            let result = compute_profit(&normalized.input, tariff);
            let profit_available = normalized.profit_available();

            match normalized.cost_source {
                CostSource::Missing => summary.cost_missing += 1,
                CostSource::Estimated => summary.estimated_cost += 1,
                CostSource::Actual => {}
            }
            if profit_available {
                total_profit += to_decimal(result.profit);
                if result.is_profitable {
                    summary.profitable += 1;
                } else {
                    summary.unprofitable += 1;
                }
            }

            BatchRow {
                index,
                id: normalized.id,
                cost_source: normalized.cost_source,
                defaulted: normalized.defaulted,
                profit_available,
                result,
                error: None,
            }
        })
        .collect();

    summary.total_profit = to_f64(total_profit);
    tracing::debug!(
        rows = summary.rows,
        profitable = summary.profitable,
        cost_missing = summary.cost_missing,
        invalid = summary.invalid,
        "Batch evaluated"
    );

    BatchReport { rows, summary }
}

fn invalid_row(index: usize, value: &Value, error: String) -> BatchRow {
    // Keep whatever identifier the row carried so the console can point at it
    let id = ["id", "barcode", "sku", "product_id", "productId"]
        .iter()
        .find_map(|key| match value.get(*key) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        });

    BatchRow {
        index,
        id,
        cost_source: CostSource::Missing,
        defaulted: Vec::new(),
        profit_available: false,
        result: ProfitResult::default(),
        error: Some(error),
    }
}
