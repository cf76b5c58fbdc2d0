//! Visibility options
//!
//! The marketplace boosts listings priced at a multiple of the current
//! price. Sellers compare the profit at each multiple with the current one.

use shared::models::{OptionProfit, PricingInput, TariffConstants, VisibilityOptionResult};

use super::calculator::compute_profit;
use super::money::{round_money, to_decimal, to_f64};

/// Profit at `option_price` compared with the profit at `base.sale_price`
///
/// `base` is not modified.
pub fn evaluate_option(
    base: &PricingInput,
    option_price: f64,
    tariff: &TariffConstants,
) -> OptionProfit {
    let current = compute_profit(base, tariff).profit;
    option_against(current, base, option_price, tariff)
}

/// Every visibility multiplier configured in the tariff, in tariff order
pub fn evaluate_visibility_options(
    base: &PricingInput,
    tariff: &TariffConstants,
) -> Vec<VisibilityOptionResult> {
    let current = compute_profit(base, tariff).profit;
    let sale_price = to_decimal(base.sale_price);

    tariff
        .visibility_options
        .iter()
        .map(|option| {
            let option_price = to_f64(round_money(sale_price * to_decimal(option.factor)));
            VisibilityOptionResult {
                label: option.label.clone(),
                factor: option.factor,
                option_price,
                outcome: option_against(current, base, option_price, tariff),
            }
        })
        .collect()
}

/// Option profit against an already computed current profit
pub(crate) fn option_against(
    current_profit: f64,
    base: &PricingInput,
    option_price: f64,
    tariff: &TariffConstants,
) -> OptionProfit {
    let profit = compute_profit(&base.at_price(option_price), tariff).profit;
    OptionProfit {
        profit,
        profit_diff: to_f64(to_decimal(profit) - to_decimal(current_profit)),
        is_profitable: profit > 0.0,
    }
}
