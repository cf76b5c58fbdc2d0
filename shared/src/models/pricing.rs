//! Pricing Model
//!
//! Inputs and outputs of the profit calculator and the price solver. All
//! money fields are `f64` on the wire; the engine computes in `Decimal`.

use serde::{Deserialize, Serialize};

use super::record::{CostFallback, NormalizedInput, RawProductRecord};

/// Per-call calculation input
///
/// Money is VAT-inclusive, rates are percentages (21 = 21%).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct PricingInput {
    /// Acquisition cost of one unit (VAT-inclusive)
    pub cost: f64,
    /// Offered price (VAT-inclusive)
    pub sale_price: f64,
    /// Marketplace commission on the VAT-exclusive sale price
    pub commission_rate: f64,
    /// Product VAT rate
    pub vat_rate: f64,
    /// Volumetric shipping weight (desi)
    pub dimensional_weight: f64,
}

impl PricingInput {
    /// Same product offered at another price
    pub fn at_price(&self, sale_price: f64) -> Self {
        Self { sale_price, ..*self }
    }
}

/// Forward calculation result
///
/// `profit` is the only figure rounded by the calculation itself; the
/// breakdown fields are rounded to 2 decimals for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfitResult {
    pub shipping_cost: f64,
    /// 0 or the shipping cost, per the support threshold
    pub shipping_support: f64,
    pub sale_excl_vat: f64,
    pub sale_vat: f64,
    pub cost_excl_vat: f64,
    pub cost_vat: f64,
    pub commission_amount: f64,
    pub commission_vat: f64,
    pub shipping_vat: f64,
    pub platform_vat: f64,
    /// Sale VAT minus every deductible VAT component (signed)
    pub net_vat: f64,
    pub profit: f64,
    pub is_profitable: bool,
    /// profit / (cost + shipping), 0 when the divisor is 0
    pub profit_rate: f64,
    /// profit / sale price, 0 when the divisor is 0
    pub profit_margin: f64,
}

/// Desired profit for the inverse calculation
///
/// Serialized as `{"mode": "rate", "value": 25}`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "mode", content = "value", rename_all = "lowercase")]
pub enum ProfitSpec {
    /// Percent of (cost + shipping)
    Rate(f64),
    /// Percent of the price
    Margin(f64),
    /// Fixed amount
    Amount(f64),
}

/// Inverse calculation input
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SolveRequest {
    pub cost: f64,
    /// Resolved shipping cost (not a weight)
    pub shipping: f64,
    pub vat_rate: f64,
    pub commission_rate: f64,
    /// Defaults to the tariff's platform service fee
    #[serde(default)]
    pub platform_fee: Option<f64>,
    pub profit: ProfitSpec,
}

/// Inverse calculation result
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PriceSolution {
    /// (cost + shipping) grossed up by the requested profit
    pub price_before_vat: f64,
    /// price_before_vat - (cost + shipping)
    pub target_profit: f64,
    /// VAT-inclusive price that yields `target_profit`
    pub final_price: f64,
    /// Whether `final_price` clears the shipping-support threshold
    pub shipping_supported: bool,
    /// Margin was >= 100% and got clamped
    pub margin_clamped: bool,
    /// Target fell inside the support jump; `final_price` is the threshold
    pub threshold_gap: bool,
}

/// Profit at an alternative price compared to the current one
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct OptionProfit {
    pub profit: f64,
    /// option profit - current profit
    pub profit_diff: f64,
    pub is_profitable: bool,
}

/// One evaluated visibility multiplier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VisibilityOptionResult {
    pub label: String,
    pub factor: f64,
    pub option_price: f64,
    #[serde(flatten)]
    pub outcome: OptionProfit,
}

/// Forward calculation request: a raw record plus the missing-cost policy
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfitRequest {
    #[serde(flatten)]
    pub record: RawProductRecord,
    #[serde(default)]
    pub cost_fallback: Option<CostFallback>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfitResponse {
    pub normalized: NormalizedInput,
    /// False when the cost is missing; show "cost not set" instead of profit
    pub profit_available: bool,
    pub result: ProfitResult,
}

/// Visibility request: a raw record and optionally one custom price
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VisibilityRequest {
    #[serde(flatten)]
    pub record: RawProductRecord,
    #[serde(default)]
    pub option_price: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VisibilityReport {
    pub current_profit: f64,
    pub options: Vec<VisibilityOptionResult>,
    /// Present when the request named an `option_price`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<OptionProfit>,
}
