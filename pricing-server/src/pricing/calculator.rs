//! Forward profit calculation
//!
//! Cost, commission, VAT, shipping and a candidate sale price → net profit.
//! Uses rust_decimal for every intermediate figure; the profit is rounded
//! once, at the end.

use rust_decimal::prelude::*;
use shared::models::{PricingInput, ProfitResult, TariffConstants};

use super::money::{percent, ratio_or_zero, ratio_to_f64, round_money, to_decimal, to_f64};
use super::shipping::{is_supported_at, resolve_shipping_cost};
use super::vat::{strip_vat, vat_on_top};

/// Compute profit for one product at `input.sale_price`
///
/// 1. shipping cost from the weight table
/// 2. shipping support when the sale price clears the threshold
/// 3. strip product VAT from sale price and cost
/// 4. commission on the VAT-exclusive sale price
/// 5. secondary VAT on commission, shipping and platform fee
/// 6. net VAT = sale VAT - every deductible VAT
/// 7. profit = sale - cost - commission - shipping + support - fee - net VAT
///
/// Never panics; non-finite inputs read as 0.
pub fn compute_profit(input: &PricingInput, tariff: &TariffConstants) -> ProfitResult {
    let sale_price = to_decimal(input.sale_price);
    let cost = to_decimal(input.cost);
    let vat_rate = to_decimal(input.vat_rate);
    let secondary_rate = to_decimal(tariff.secondary_vat_rate);
    let platform_fee = to_decimal(tariff.platform_service_fee);

    // Step 1-2
    let shipping_cost = to_decimal(resolve_shipping_cost(
        input.dimensional_weight,
        &tariff.shipping_steps,
    ));
    let shipping_support =
        if is_supported_at(sale_price, to_decimal(tariff.shipping_support_threshold)) {
            shipping_cost
        } else {
            Decimal::ZERO
        };

    // Step 3
    let sale = strip_vat(sale_price, vat_rate);
    let cost_split = strip_vat(cost, vat_rate);

    // Step 4-5
    let commission = sale.excl_vat * percent(input.commission_rate);
    let commission_vat = vat_on_top(commission, secondary_rate);
    let shipping_vat = vat_on_top(shipping_cost, secondary_rate);
    let platform_vat = vat_on_top(platform_fee, secondary_rate);

    // Step 6
    let net_vat =
        sale.vat_amount - cost_split.vat_amount - commission_vat - shipping_vat - platform_vat;

    // Step 7
    let profit = sale_price - cost - commission - shipping_cost + shipping_support
        - platform_fee
        - net_vat;
    let rounded_profit = round_money(profit);

    ProfitResult {
        shipping_cost: to_f64(shipping_cost),
        shipping_support: to_f64(shipping_support),
        sale_excl_vat: to_f64(sale.excl_vat),
        sale_vat: to_f64(sale.vat_amount),
        cost_excl_vat: to_f64(cost_split.excl_vat),
        cost_vat: to_f64(cost_split.vat_amount),
        commission_amount: to_f64(commission),
        commission_vat: to_f64(commission_vat),
        shipping_vat: to_f64(shipping_vat),
        platform_vat: to_f64(platform_vat),
        net_vat: to_f64(net_vat),
        profit: to_f64(rounded_profit),
        is_profitable: rounded_profit > Decimal::ZERO,
        profit_rate: ratio_to_f64(ratio_or_zero(profit, cost + shipping_cost)),
        profit_margin: ratio_to_f64(ratio_or_zero(profit, sale_price)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn golden_input() -> PricingInput {
        PricingInput {
            cost: 100.0,
            sale_price: 200.0,
            commission_rate: 21.0,
            vat_rate: 20.0,
            dimensional_weight: 1.0,
        }
    }

    #[test]
    fn test_golden_scenario() {
        let result = compute_profit(&golden_input(), &TariffConstants::default_2025());

        assert_eq!(result.shipping_cost, 35.99);
        assert_eq!(result.shipping_support, 35.99);
        assert_eq!(result.sale_excl_vat, 166.67);
        assert_eq!(result.sale_vat, 33.33);
        assert_eq!(result.commission_amount, 35.0);
        assert_eq!(result.commission_vat, 6.3);
        assert_eq!(result.shipping_vat, 6.48);
        assert_eq!(result.platform_vat, 1.26);
        assert_eq!(result.net_vat, 2.63);
        assert_eq!(result.profit, 55.38);
        assert!(result.is_profitable);
    }

    #[test]
    fn test_ratios() {
        let result = compute_profit(&golden_input(), &TariffConstants::default_2025());

        // 55.379733 / 135.99 and / 200
        assert_eq!(result.profit_rate, 0.4072);
        assert_eq!(result.profit_margin, 0.2769);
    }

    #[test]
    fn test_below_threshold_loses_support() {
        let tariff = TariffConstants::default_2025();
        let below = compute_profit(&golden_input().at_price(149.99), &tariff);
        let at = compute_profit(&golden_input().at_price(150.0), &tariff);

        assert_eq!(below.shipping_support, 0.0);
        assert_eq!(at.shipping_support, 35.99);
        // The support jump outweighs the 0.01 price difference
        assert!(at.profit - below.profit > 30.0);
    }

    #[test]
    fn test_zero_vat_product() {
        let input = PricingInput {
            vat_rate: 0.0,
            ..golden_input()
        };
        let result = compute_profit(&input, &TariffConstants::default_2025());

        assert_eq!(result.sale_vat, 0.0);
        assert_eq!(result.cost_vat, 0.0);
        // 0 - 0 - 7.56 - 6.4782 - 1.2582 = -15.2964
        assert_eq!(result.net_vat, -15.3);
        // 200 - 100 - 42 - 6.99 + 15.2964
        assert_eq!(result.profit, 66.31);
    }

    #[test]
    fn test_unprofitable_and_zero_profit() {
        let tariff = TariffConstants::default_2025();
        let loss = compute_profit(&golden_input().at_price(100.0), &tariff);
        assert!(loss.profit < 0.0);
        assert!(!loss.is_profitable);

        let empty = compute_profit(&PricingInput::default(), &tariff);
        assert!(!empty.is_profitable);
        assert_eq!(empty.profit_margin, 0.0);
    }

    #[test]
    fn test_degenerate_inputs_do_not_panic() {
        let input = PricingInput {
            cost: f64::NAN,
            sale_price: f64::INFINITY,
            commission_rate: -50.0,
            vat_rate: f64::NAN,
            dimensional_weight: -1.0,
        };
        let result = compute_profit(&input, &TariffConstants::default_2025());

        assert_eq!(result.shipping_cost, 35.99);
        assert!(result.profit.is_finite());
    }
}
