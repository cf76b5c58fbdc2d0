//! Batch Evaluation Model
//!
//! A spreadsheet import or a catalog page is evaluated as one batch. No row
//! can abort the run: every row produces a [`BatchRow`], and rows without a
//! usable cost are flagged instead of rejected.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::pricing::ProfitResult;
use super::record::{CostFallback, CostSource, DefaultedField};

/// Largest accepted batch
pub const MAX_BATCH_ROWS: usize = 5_000;

/// Batch evaluation request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchRequest {
    /// Rows are read one by one, so a malformed row only fails itself
    #[serde(alias = "products", alias = "items")]
    pub rows: Vec<Value>,
    /// Overrides the server default for rows without a cost
    #[serde(default)]
    pub cost_fallback: Option<CostFallback>,
}

/// Outcome for one row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchRow {
    /// Position in the request
    pub index: usize,
    pub id: Option<String>,
    pub cost_source: CostSource,
    pub defaulted: Vec<DefaultedField>,
    /// False when the cost is missing; `result.profit` is then meaningless
    pub profit_available: bool,
    pub result: ProfitResult,
    /// Why the row could not be read as a product record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Aggregate over the rows whose profit is available
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BatchSummary {
    pub rows: usize,
    pub profitable: usize,
    pub unprofitable: usize,
    pub cost_missing: usize,
    pub estimated_cost: usize,
    /// Rows that could not be read at all
    pub invalid: usize,
    pub total_profit: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BatchReport {
    pub rows: Vec<BatchRow>,
    pub summary: BatchSummary,
}
