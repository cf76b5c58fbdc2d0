//! VAT decomposition
//!
//! Product VAT is included in sale price and cost and has to be stripped.
//! Commission, shipping and the platform fee are VAT-exclusive; their VAT
//! (secondary rate) sits on top of the amount.

use rust_decimal::Decimal;

/// A VAT-inclusive amount split into base and tax
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VatSplit {
    pub excl_vat: Decimal,
    pub vat_amount: Decimal,
}

/// Split `amount` (VAT-inclusive) at `rate` percent
///
/// `excl = amount / (1 + rate/100)`, `vat = amount - excl`. A rate of 0 or
/// below is the identity.
pub fn strip_vat(amount: Decimal, rate: Decimal) -> VatSplit {
    let excl_vat = if rate > Decimal::ZERO {
        amount
            .checked_div(Decimal::ONE + rate / Decimal::ONE_HUNDRED)
            .unwrap_or(amount)
    } else {
        amount
    };

    VatSplit {
        excl_vat,
        vat_amount: amount - excl_vat,
    }
}

/// Gross up a VAT-exclusive amount; inverse of [`strip_vat`]
pub fn add_vat(amount: Decimal, rate: Decimal) -> Decimal {
    if rate > Decimal::ZERO {
        amount * (Decimal::ONE + rate / Decimal::ONE_HUNDRED)
    } else {
        amount
    }
}

/// VAT charged on top of a VAT-exclusive amount
pub fn vat_on_top(amount: Decimal, rate: Decimal) -> Decimal {
    amount * rate / Decimal::ONE_HUNDRED
}
