//! Tariff Model
//!
//! Platform-side constants a calculation depends on: platform service fee,
//! secondary VAT, shipping-support threshold, the desi → shipping-cost step
//! table. A tariff is immutable once loaded; a new tariff period is a new
//! [`TariffConstants`] value appended to a [`TariffSchedule`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{TariffError, TariffResult};

/// First day of the built-in 2025 tariff
pub const TARIFF_2025_START: NaiveDate = match NaiveDate::from_ymd_opt(2025, 1, 1) {
    Some(date) => date,
    None => NaiveDate::MIN,
};

/// Commission applied when a record carries none (percent)
pub const DEFAULT_COMMISSION_RATE: f64 = 21.0;
/// Product VAT applied when a record carries none (percent)
pub const DEFAULT_VAT_RATE: f64 = 18.0;

/// One step of the shipping table: weights up to `max_weight` cost `cost`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ShippingStep {
    /// Upper dimensional weight bound (desi), inclusive
    pub max_weight: f64,
    /// Shipping cost (VAT-exclusive)
    pub cost: f64,
}

/// Ascending shipping steps plus the open-ended ceiling
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingStepTable {
    pub steps: Vec<ShippingStep>,
    /// Cost for any weight above the highest bound
    pub ceiling_cost: f64,
}

impl ShippingStepTable {
    /// Smallest weight bound; used as the default weight
    pub fn min_weight(&self) -> f64 {
        self.steps.first().map(|s| s.max_weight).unwrap_or(1.0)
    }

    /// Check ordering and value sanity
    pub fn validate(&self) -> TariffResult<()> {
        if self.steps.is_empty() {
            return Err(TariffError::EmptyShippingTable);
        }

        let mut prev: Option<&ShippingStep> = None;
        for (index, step) in self.steps.iter().enumerate() {
            require_non_negative("shipping_steps.max_weight", step.max_weight)?;
            require_non_negative("shipping_steps.cost", step.cost)?;
            if step.max_weight <= 0.0 {
                return Err(TariffError::InvalidValue {
                    field: "shipping_steps.max_weight",
                    value: step.max_weight,
                });
            }
            if let Some(prev) = prev {
                if step.max_weight <= prev.max_weight {
                    return Err(TariffError::UnsortedShippingTable { index });
                }
                if step.cost < prev.cost {
                    return Err(TariffError::DecreasingShippingCost { index });
                }
            }
            prev = Some(step);
        }

        require_non_negative("shipping_steps.ceiling_cost", self.ceiling_cost)?;
        if let Some(last) = self.steps.last()
            && self.ceiling_cost < last.cost
        {
            return Err(TariffError::DecreasingShippingCost {
                index: self.steps.len(),
            });
        }
        Ok(())
    }
}

/// A labelled visibility multiplier (e.g. "5x" → sell at 1.4 × price)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VisibilityMultiplier {
    pub label: String,
    pub factor: f64,
}

/// Tariff constants for one period
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TariffConstants {
    /// First day this tariff applies
    pub effective_from: NaiveDate,
    /// Fixed per-order fee (VAT-exclusive)
    pub platform_service_fee: f64,
    /// VAT on commission, shipping and platform fee (percent)
    pub secondary_vat_rate: f64,
    /// Minimum sale price for the platform to reimburse shipping
    pub shipping_support_threshold: f64,
    pub shipping_steps: ShippingStepTable,
    #[serde(default = "default_visibility_options")]
    pub visibility_options: Vec<VisibilityMultiplier>,
    #[serde(default = "default_commission_rate")]
    pub default_commission_rate: f64,
    #[serde(default = "default_vat_rate")]
    pub default_vat_rate: f64,
}

fn default_visibility_options() -> Vec<VisibilityMultiplier> {
    vec![
        VisibilityMultiplier {
            label: "5x".to_string(),
            factor: 1.4,
        },
        VisibilityMultiplier {
            label: "8x".to_string(),
            factor: 1.8,
        },
    ]
}

fn default_commission_rate() -> f64 {
    DEFAULT_COMMISSION_RATE
}

fn default_vat_rate() -> f64 {
    DEFAULT_VAT_RATE
}

impl TariffConstants {
    /// The 2025 tariff: desi 1..10 from 35.99 in 4.00 steps, wider steps up
    /// to 30 desi, 209.99 above.
    pub fn default_2025() -> Self {
        let steps = [
            (1.0, 35.99),
            (2.0, 39.99),
            (3.0, 43.99),
            (4.0, 47.99),
            (5.0, 51.99),
            (6.0, 55.99),
            (7.0, 59.99),
            (8.0, 63.99),
            (9.0, 67.99),
            (10.0, 71.99),
            (15.0, 94.99),
            (20.0, 119.99),
            (25.0, 149.99),
            (30.0, 179.99),
        ]
        .into_iter()
        .map(|(max_weight, cost)| ShippingStep { max_weight, cost })
        .collect();

        Self {
            effective_from: TARIFF_2025_START,
            platform_service_fee: 6.99,
            secondary_vat_rate: 18.0,
            shipping_support_threshold: 150.0,
            shipping_steps: ShippingStepTable {
                steps,
                ceiling_cost: 209.99,
            },
            visibility_options: default_visibility_options(),
            default_commission_rate: DEFAULT_COMMISSION_RATE,
            default_vat_rate: DEFAULT_VAT_RATE,
        }
    }

    /// Validate every field; a tariff that fails here is never installed
    pub fn validate(&self) -> TariffResult<()> {
        require_non_negative("platform_service_fee", self.platform_service_fee)?;
        require_non_negative("secondary_vat_rate", self.secondary_vat_rate)?;
        require_non_negative("shipping_support_threshold", self.shipping_support_threshold)?;
        require_non_negative("default_commission_rate", self.default_commission_rate)?;
        require_non_negative("default_vat_rate", self.default_vat_rate)?;
        for option in &self.visibility_options {
            if !option.factor.is_finite() || option.factor <= 0.0 {
                return Err(TariffError::InvalidValue {
                    field: "visibility_options.factor",
                    value: option.factor,
                });
            }
        }
        self.shipping_steps.validate()
    }
}

impl Default for TariffConstants {
    fn default() -> Self {
        Self::default_2025()
    }
}

fn require_non_negative(field: &'static str, value: f64) -> TariffResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(TariffError::InvalidValue { field, value });
    }
    Ok(())
}

/// Date-versioned tariffs, sorted by `effective_from`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TariffSchedule {
    versions: Vec<TariffConstants>,
}

/// A tariff file holds either one tariff or a list of versions
#[derive(Deserialize)]
#[serde(untagged)]
enum TariffDocument {
    Many(Vec<TariffConstants>),
    One(Box<TariffConstants>),
}

impl TariffSchedule {
    /// Build a schedule, validating every version
    pub fn new(mut versions: Vec<TariffConstants>) -> TariffResult<Self> {
        if versions.is_empty() {
            return Err(TariffError::EmptySchedule);
        }
        for version in &versions {
            version.validate()?;
        }
        versions.sort_by_key(|v| v.effective_from);
        for pair in versions.windows(2) {
            if pair[0].effective_from == pair[1].effective_from {
                return Err(TariffError::DuplicateVersion(pair[1].effective_from));
            }
        }
        Ok(Self { versions })
    }

    /// Parse a JSON tariff document (single object or array)
    pub fn from_json(json: &str) -> TariffResult<Self> {
        let versions = match serde_json::from_str::<TariffDocument>(json)? {
            TariffDocument::Many(versions) => versions,
            TariffDocument::One(version) => vec![*version],
        };
        Self::new(versions)
    }

    /// The tariff in force on `date`: the latest version starting on or before it
    pub fn for_date(&self, date: NaiveDate) -> TariffResult<&TariffConstants> {
        self.versions
            .iter()
            .rev()
            .find(|v| v.effective_from <= date)
            .ok_or(TariffError::NotEffective(date))
    }

    /// Most recent version
    pub fn latest(&self) -> &TariffConstants {
        // `new` rejects empty schedules
        &self.versions[self.versions.len() - 1]
    }

    pub fn versions(&self) -> &[TariffConstants] {
        &self.versions
    }
}

impl Default for TariffSchedule {
    fn default() -> Self {
        Self {
            versions: vec![TariffConstants::default_2025()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_2025_table_shape() {
        let tariff = TariffConstants::default_2025();
        let steps = &tariff.shipping_steps.steps;

        assert_eq!(steps.len(), 14);
        assert_eq!(steps[0], ShippingStep { max_weight: 1.0, cost: 35.99 });
        assert_eq!(steps[9].max_weight, 10.0);
        assert_eq!(steps[9].cost, 71.99);
        assert_eq!(tariff.shipping_steps.ceiling_cost, 209.99);
        assert!(tariff.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unsorted_steps() {
        let mut tariff = TariffConstants::default_2025();
        tariff.shipping_steps.steps.swap(2, 3);

        assert!(matches!(
            tariff.validate(),
            Err(TariffError::UnsortedShippingTable { index: 3 })
        ));
    }

    #[test]
    fn test_validate_rejects_empty_table_and_bad_fee() {
        let mut tariff = TariffConstants::default_2025();
        tariff.shipping_steps.steps.clear();
        assert!(matches!(
            tariff.validate(),
            Err(TariffError::EmptyShippingTable)
        ));

        let mut tariff = TariffConstants::default_2025();
        tariff.platform_service_fee = f64::NAN;
        assert!(matches!(
            tariff.validate(),
            Err(TariffError::InvalidValue { field: "platform_service_fee", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_ceiling_below_last_step() {
        let mut tariff = TariffConstants::default_2025();
        tariff.shipping_steps.ceiling_cost = 10.0;
        assert!(matches!(
            tariff.validate(),
            Err(TariffError::DecreasingShippingCost { index: 14 })
        ));
    }

    #[test]
    fn test_schedule_picks_version_by_date() {
        let old = TariffConstants::default_2025();
        let mut new = TariffConstants::default_2025();
        new.effective_from = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        new.platform_service_fee = 8.49;

        let schedule = TariffSchedule::new(vec![new, old]).unwrap();

        let june = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let july = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        assert_eq!(schedule.for_date(june).unwrap().platform_service_fee, 6.99);
        assert_eq!(schedule.for_date(july).unwrap().platform_service_fee, 8.49);
        assert_eq!(schedule.latest().platform_service_fee, 8.49);

        let before = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert!(matches!(
            schedule.for_date(before),
            Err(TariffError::NotEffective(_))
        ));
    }

    #[test]
    fn test_schedule_rejects_duplicate_dates() {
        let result = TariffSchedule::new(vec![
            TariffConstants::default_2025(),
            TariffConstants::default_2025(),
        ]);
        assert!(matches!(result, Err(TariffError::DuplicateVersion(_))));
    }

    #[test]
    fn test_from_json_single_object_uses_defaults() {
        let json = r#"{
            "effective_from": "2026-01-01",
            "platform_service_fee": 7.99,
            "secondary_vat_rate": 20,
            "shipping_support_threshold": 200,
            "shipping_steps": {
                "steps": [
                    { "max_weight": 1, "cost": 40.0 },
                    { "max_weight": 5, "cost": 60.0 }
                ],
                "ceiling_cost": 150.0
            }
        }"#;

        let schedule = TariffSchedule::from_json(json).unwrap();
        let tariff = schedule.latest();
        assert_eq!(tariff.secondary_vat_rate, 20.0);
        assert_eq!(tariff.default_commission_rate, DEFAULT_COMMISSION_RATE);
        assert_eq!(tariff.visibility_options.len(), 2);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            TariffSchedule::from_json("{\"nope\": 1}"),
            Err(TariffError::Parse(_))
        ));
    }
}
