//! Price Band Model
//!
//! Promotional labels the marketplace attaches to products priced under its
//! tier thresholds.

use serde::{Deserialize, Serialize};

use super::pricing::OptionProfit;
use super::record::RawProductRecord;

/// Promotional price band
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceBand {
    None,
    /// "Avantajlı"
    Advantageous,
    /// "Çok Avantajlı"
    VeryAdvantageous,
    /// "Süper Fiyat"
    SuperPrice,
}

impl PriceBand {
    /// Label shown on the storefront
    pub fn label(&self) -> &'static str {
        match self {
            PriceBand::None => "-",
            PriceBand::Advantageous => "Avantajlı",
            PriceBand::VeryAdvantageous => "Çok Avantajlı",
            PriceBand::SuperPrice => "Süper Fiyat",
        }
    }
}

/// Closed price range `[lower, upper]`
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct PriceRange {
    pub lower: f64,
    pub upper: f64,
}

impl PriceRange {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }
}

/// Tier thresholds, most expensive tier first
///
/// Consistent when `tier4_upper <= tier3.lower <= tier3.upper <= tier2.lower
/// <= tier2.upper`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct PriceBands {
    /// "Avantajlı" range
    pub tier2: PriceRange,
    /// "Çok Avantajlı" range
    pub tier3: PriceRange,
    /// Highest price still labelled "Süper Fiyat"
    pub tier4_upper: f64,
}

impl PriceBands {
    pub fn is_consistent(&self) -> bool {
        self.tier4_upper <= self.tier3.lower
            && self.tier3.lower <= self.tier3.upper
            && self.tier3.upper <= self.tier2.lower
            && self.tier2.lower <= self.tier2.upper
    }
}

/// Classification request: a price and possibly inconsistent thresholds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BandClassifyRequest {
    pub price: f64,
    pub bands: PriceBands,
}

/// Classification outcome, with the thresholds actually used
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BandClassification {
    pub band: PriceBand,
    pub label: String,
    pub bands: PriceBands,
    /// Thresholds had to be widened into order
    pub repaired: bool,
}

/// Profit of moving the sale price to a tier's ceiling
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BandPriceOption {
    pub band: PriceBand,
    pub price: f64,
    #[serde(flatten)]
    pub outcome: OptionProfit,
}

/// Classification request that may also ask for the tier-ceiling prices
/// of a product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandQuoteRequest {
    #[serde(flatten)]
    pub classify: BandClassifyRequest,
    #[serde(default)]
    pub product: Option<RawProductRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BandQuote {
    #[serde(flatten)]
    pub classification: BandClassification,
    /// Empty unless the request carried a product
    #[serde(default)]
    pub options: Vec<BandPriceOption>,
}
