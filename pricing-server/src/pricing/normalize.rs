//! Record normalization
//!
//! Maps a [`RawProductRecord`] onto a [`PricingInput`], applying the tariff
//! defaults for missing fields and recording where the cost came from.

use shared::models::{
    CostFallback, CostSource, DefaultedField, ESTIMATED_COST_RATIO, NormalizedInput,
    PricingInput, RawProductRecord, TariffConstants,
};

use super::money::{round_money, to_decimal, to_f64};

/// Normalize one raw record
///
/// | field | when absent or unusable |
/// |-------|-------------------------|
/// | sale_price | 0 |
/// | cost | 0 and `Missing`, or `sale_price × 0.7` and `Estimated` |
/// | commission_rate | tariff default (21) |
/// | vat_rate | tariff default (18) |
/// | dimensional_weight | smallest shipping step (1) |
pub fn normalize_record(
    raw: &RawProductRecord,
    tariff: &TariffConstants,
    fallback: CostFallback,
) -> NormalizedInput {
    let mut defaulted = Vec::new();
    let mut take = |value: Option<f64>, field: DefaultedField, default: f64| match value {
        Some(v) if v >= 0.0 => v,
        _ => {
            defaulted.push(field);
            default
        }
    };

    let sale_price = take(raw.sale_price, DefaultedField::SalePrice, 0.0);
    let commission_rate = take(
        raw.commission_rate,
        DefaultedField::CommissionRate,
        tariff.default_commission_rate,
    );
    let vat_rate = take(raw.vat_rate, DefaultedField::VatRate, tariff.default_vat_rate);
    let dimensional_weight = match raw.dimensional_weight {
        Some(w) if w > 0.0 => w,
        _ => {
            defaulted.push(DefaultedField::DimensionalWeight);
            tariff.shipping_steps.min_weight()
        }
    };

    let (cost, cost_source) = match raw.cost {
        Some(cost) if cost >= 0.0 => (cost, CostSource::Actual),
        _ => {
            defaulted.push(DefaultedField::Cost);
            match fallback {
                CostFallback::EstimateFromSalePrice if sale_price > 0.0 => (
                    to_f64(round_money(
                        to_decimal(sale_price) * to_decimal(ESTIMATED_COST_RATIO),
                    )),
                    CostSource::Estimated,
                ),
                _ => (0.0, CostSource::Missing),
            }
        }
    };

    if !defaulted.is_empty() {
        tracing::debug!(id = ?raw.id, ?defaulted, ?cost_source, "Record fields defaulted");
    }

    NormalizedInput {
        id: raw.id.clone(),
        input: PricingInput {
            cost,
            sale_price,
            commission_rate,
            vat_rate,
            dimensional_weight,
        },
        cost_source,
        defaulted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tariff() -> TariffConstants {
        TariffConstants::default_2025()
    }

    #[test]
    fn test_complete_record_passes_through() {
        let raw = RawProductRecord {
            id: Some("A-1".into()),
            sale_price: Some(200.0),
            cost: Some(100.0),
            commission_rate: Some(19.5),
            vat_rate: Some(10.0),
            dimensional_weight: Some(4.0),
        };
        let normalized = normalize_record(&raw, &tariff(), CostFallback::Missing);

        assert_eq!(normalized.cost_source, CostSource::Actual);
        assert!(normalized.defaulted.is_empty());
        assert!(normalized.profit_available());
        assert_eq!(normalized.input.commission_rate, 19.5);
        assert_eq!(normalized.input.dimensional_weight, 4.0);
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let raw = RawProductRecord {
            sale_price: Some(150.0),
            ..Default::default()
        };
        let normalized = normalize_record(&raw, &tariff(), CostFallback::Missing);

        assert_eq!(normalized.input.commission_rate, 21.0);
        assert_eq!(normalized.input.vat_rate, 18.0);
        assert_eq!(normalized.input.dimensional_weight, 1.0);
        assert_eq!(normalized.input.cost, 0.0);
        assert_eq!(normalized.cost_source, CostSource::Missing);
        assert!(!normalized.profit_available());
        assert_eq!(
            normalized.defaulted,
            vec![
                DefaultedField::CommissionRate,
                DefaultedField::VatRate,
                DefaultedField::DimensionalWeight,
                DefaultedField::Cost,
            ]
        );
    }

    #[test]
    fn test_estimated_cost_only_when_requested() {
        let raw = RawProductRecord {
            sale_price: Some(149.9),
            ..Default::default()
        };
        let normalized = normalize_record(&raw, &tariff(), CostFallback::EstimateFromSalePrice);

        assert_eq!(normalized.cost_source, CostSource::Estimated);
        assert_eq!(normalized.input.cost, 104.93);
        assert!(normalized.profit_available());
    }

    #[test]
    fn test_estimate_needs_a_sale_price() {
        let normalized = normalize_record(
            &RawProductRecord::default(),
            &tariff(),
            CostFallback::EstimateFromSalePrice,
        );
        assert_eq!(normalized.cost_source, CostSource::Missing);
        assert!(normalized.defaulted.contains(&DefaultedField::SalePrice));
    }

    #[test]
    fn test_negative_values_are_defaulted() {
        let raw = RawProductRecord {
            sale_price: Some(100.0),
            cost: Some(-4.0),
            vat_rate: Some(-1.0),
            dimensional_weight: Some(0.0),
            ..Default::default()
        };
        let normalized = normalize_record(&raw, &tariff(), CostFallback::Missing);

        assert_eq!(normalized.cost_source, CostSource::Missing);
        assert_eq!(normalized.input.vat_rate, 18.0);
        assert_eq!(normalized.input.dimensional_weight, 1.0);
    }
}
