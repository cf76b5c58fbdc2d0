//! Price solver
//!
//! Inverse of [`compute_profit`](super::compute_profit): the VAT-inclusive
//! sale price that yields a requested profit.
//!
//! With `v` product VAT, `s` secondary VAT, `c` commission (fractions), cost
//! `C`, shipping `S`, platform fee `F` and shipping support `sup`, the
//! forward calculation reduces to
//!
//! ```text
//! profit = [P(1 - c(1 - s)) - C] / (1 + v) - (S + F)(1 - s) + sup
//! ```
//!
//! which is solved for `P`. `sup` depends on `P` itself (threshold), so the
//! solver tries both sides of the threshold.

use rust_decimal::prelude::*;
use shared::models::{PriceSolution, ProfitSpec, SolveRequest, TariffConstants};

use super::money::{percent, round_money, to_decimal, to_f64};
use super::shipping::is_supported_at;

/// Margins at or above 100% are replaced by this multiple of (cost + shipping)
const CLAMPED_MARGIN_MULTIPLIER: Decimal = Decimal::ONE_HUNDRED;

/// Solve for the sale price that yields the requested profit
///
/// The target is rounded to cents before solving, so the forward profit at
/// `final_price` lands within 0.01 of `target_profit`.
pub fn solve_price(request: &SolveRequest, tariff: &TariffConstants) -> PriceSolution {
    let cost = to_decimal(request.cost);
    let shipping = to_decimal(request.shipping);
    let base = cost + shipping;

    let (price_before_vat, margin_clamped) = price_before_vat(base, request.profit);
    if margin_clamped {
        tracing::warn!(
            cost = request.cost,
            shipping = request.shipping,
            profit = ?request.profit,
            "Margin of 100% or more requested, price clamped"
        );
    }
    let target_profit = round_money(price_before_vat - base);

    let terms = SolveTerms {
        cost,
        shipping,
        platform_fee: to_decimal(request.platform_fee.unwrap_or(tariff.platform_service_fee)),
        vat: vat_fraction(request.vat_rate),
        secondary: percent(tariff.secondary_vat_rate),
        commission: percent(request.commission_rate),
    };
    let threshold = to_decimal(tariff.shipping_support_threshold);

    let (final_price, shipping_supported, threshold_gap) =
        match terms.price_for(target_profit, shipping) {
            Some(price) if is_supported_at(price, threshold) => (price, true, false),
            _ => match terms.price_for(target_profit, Decimal::ZERO) {
                Some(price) if !is_supported_at(price, threshold) => (price, false, false),
                Some(_) => {
                    // Without support the price clears the threshold, with
                    // support it falls below it: the target sits in the jump.
                    tracing::debug!(
                        target_profit = %target_profit,
                        threshold = %threshold,
                        "Target profit inside shipping support gap, using threshold price"
                    );
                    (threshold, true, true)
                }
                None => {
                    tracing::warn!(
                        commission_rate = request.commission_rate,
                        "Commission consumes the whole sale price, no price reaches the target"
                    );
                    (Decimal::ZERO, false, false)
                }
            },
        };

    PriceSolution {
        price_before_vat: to_f64(price_before_vat),
        target_profit: to_f64(target_profit),
        final_price: to_f64(final_price),
        shipping_supported,
        margin_clamped,
        threshold_gap,
    }
}

/// (cost + shipping) grossed up by the requested profit; true when clamped
fn price_before_vat(base: Decimal, profit: ProfitSpec) -> (Decimal, bool) {
    match profit {
        ProfitSpec::Rate(rate) => (base * (Decimal::ONE + percent(rate)), false),
        ProfitSpec::Margin(margin) => {
            let margin = percent(margin);
            if margin >= Decimal::ONE {
                return (base * CLAMPED_MARGIN_MULTIPLIER, true);
            }
            match base.checked_div(Decimal::ONE - margin) {
                Some(price) => (price, false),
                None => (base * CLAMPED_MARGIN_MULTIPLIER, true),
            }
        }
        ProfitSpec::Amount(amount) => (base + to_decimal(amount), false),
    }
}

/// Product VAT as a fraction; rates at or below 0 are not applied
fn vat_fraction(rate: f64) -> Decimal {
    percent(rate).max(Decimal::ZERO)
}

struct SolveTerms {
    cost: Decimal,
    shipping: Decimal,
    platform_fee: Decimal,
    vat: Decimal,
    secondary: Decimal,
    commission: Decimal,
}

impl SolveTerms {
    /// Rounded VAT-inclusive price for `profit` given the support amount
    fn price_for(&self, profit: Decimal, support: Decimal) -> Option<Decimal> {
        let keep = Decimal::ONE - self.secondary;
        let divisor = Decimal::ONE - self.commission * keep;
        if divisor <= Decimal::ZERO {
            return None;
        }

        let fixed = (self.shipping + self.platform_fee) * keep - support;
        let numerator = (profit + fixed) * (Decimal::ONE + self.vat) + self.cost;
        numerator.checked_div(divisor).map(round_money)
    }
}
