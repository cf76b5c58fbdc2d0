//! Raw Product Record
//!
//! Rows arrive from catalog API responses and spreadsheet imports with
//! different field names (`sale_price` / `salePrice`, `cost` /
//! `original_price`, ...) and sometimes with numbers typed as text
//! (`"149,90"`). This is the one place those spellings are accepted.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use super::pricing::PricingInput;

/// Ratio used to estimate a missing cost from the sale price
pub const ESTIMATED_COST_RATIO: f64 = 0.7;

/// A product row as received, every numeric field optional
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawProductRecord {
    #[serde(
        default,
        alias = "barcode",
        alias = "sku",
        alias = "product_id",
        alias = "productId",
        deserialize_with = "lenient_id"
    )]
    pub id: Option<String>,

    #[serde(
        default,
        alias = "salePrice",
        alias = "price",
        deserialize_with = "lenient_f64"
    )]
    pub sale_price: Option<f64>,

    #[serde(
        default,
        alias = "original_price",
        alias = "originalPrice",
        alias = "cost_price",
        alias = "costPrice",
        deserialize_with = "lenient_f64"
    )]
    pub cost: Option<f64>,

    #[serde(
        default,
        alias = "commission",
        alias = "commissionRate",
        deserialize_with = "lenient_f64"
    )]
    pub commission_rate: Option<f64>,

    #[serde(
        default,
        alias = "vat",
        alias = "vatRate",
        alias = "kdv",
        deserialize_with = "lenient_f64"
    )]
    pub vat_rate: Option<f64>,

    #[serde(
        default,
        alias = "desi",
        alias = "dimensionalWeight",
        alias = "weight",
        deserialize_with = "lenient_f64"
    )]
    pub dimensional_weight: Option<f64>,
}

/// Where the cost used in a calculation came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CostSource {
    /// Supplied by the record
    Actual,
    /// `sale_price × ESTIMATED_COST_RATIO` placeholder
    Estimated,
    /// Absent; treated as 0 and profit must be shown as unavailable
    Missing,
}

/// What to do when a record has no cost
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CostFallback {
    #[default]
    Missing,
    EstimateFromSalePrice,
}

/// Field that was absent or unusable and received a default
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DefaultedField {
    SalePrice,
    Cost,
    CommissionRate,
    VatRate,
    DimensionalWeight,
}

/// A record mapped onto the engine's input
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NormalizedInput {
    pub id: Option<String>,
    pub input: PricingInput,
    pub cost_source: CostSource,
    pub defaulted: Vec<DefaultedField>,
}

impl NormalizedInput {
    /// Profit means something only when the cost is known or explicitly estimated
    pub fn profit_available(&self) -> bool {
        self.cost_source != CostSource::Missing
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient {
    Number(f64),
    Text(String),
    /// Booleans, arrays, objects: read as absent
    #[allow(dead_code)]
    Other(IgnoredAny),
}

/// Accept numbers, numeric text ("1.234,56", "149.90", " 20 "), null.
/// Anything else leaves the field unset so it gets its default.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Lenient>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| match v {
            Lenient::Number(n) => Some(n),
            Lenient::Text(s) => parse_decimal_text(&s),
            Lenient::Other(_) => None,
        })
        .filter(|n| n.is_finite()))
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Lenient>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Lenient::Number(n) if n.fract() == 0.0 => Some(format!("{}", n as i64)),
        Lenient::Number(n) => Some(n.to_string()),
        Lenient::Text(s) => Some(s),
        Lenient::Other(_) => None,
    }))
}

/// Parse a number typed by hand or exported from a spreadsheet
///
/// A comma is the decimal separator whenever one is present, in which case
/// dots are thousands separators. A leading or trailing `%` is ignored.
pub fn parse_decimal_text(text: &str) -> Option<f64> {
    let trimmed = text.trim().trim_matches('%').trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = if trimmed.contains(',') {
        trimmed.replace('.', "").replace(',', ".")
    } else {
        trimmed.to_string()
    };
    normalized
        .replace(' ', "")
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}
