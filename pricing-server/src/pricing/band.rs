//! Price band classification
//!
//! The marketplace labels a product "Avantajlı", "Çok Avantajlı" or
//! "Süper Fiyat" when its price is under the corresponding tier ceiling.
//! Thresholds typed by sellers are often out of order; they are repaired,
//! never rejected.

use shared::models::{
    BandClassification, BandClassifyRequest, BandPriceOption, PriceBand, PriceBands, PriceRange,
    PricingInput, TariffConstants,
};

use super::calculator::compute_profit;
use super::visibility::option_against;

/// Force `tier4_upper <= tier3.lower <= tier3.upper <= tier2.lower <= tier2.upper`
///
/// Each offending bound is widened to its predecessor. Non-finite or
/// negative bounds read as 0. Returns the repaired bands and whether
/// anything changed.
pub fn repair_bands(bands: &PriceBands) -> (PriceBands, bool) {
    let tier4_upper = sanitize(bands.tier4_upper);
    let tier3_lower = sanitize(bands.tier3.lower).max(tier4_upper);
    let tier3_upper = sanitize(bands.tier3.upper).max(tier3_lower);
    let tier2_lower = sanitize(bands.tier2.lower).max(tier3_upper);
    let tier2_upper = sanitize(bands.tier2.upper).max(tier2_lower);

    let repaired = PriceBands {
        tier2: PriceRange::new(tier2_lower, tier2_upper),
        tier3: PriceRange::new(tier3_lower, tier3_upper),
        tier4_upper,
    };
    let changed = repaired != *bands;
    (repaired, changed)
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Band of `price`, widest discount first
///
/// Each tier is read by its ceiling: the first tier whose upper bound the
/// price does not exceed wins. Prices at or below 0 have no band.
///
/// Lower bounds are not consulted here; they only order the tiers in
/// [`repair_bands`]. A price between `tier3.upper` and `tier2.lower` is
/// therefore Advantageous, so every positive price up to `tier2.upper` has
/// exactly one band (see DESIGN.md, open question 1).
pub fn classify(price: f64, bands: &PriceBands) -> PriceBand {
    if !price.is_finite() || price <= 0.0 {
        return PriceBand::None;
    }

    if price <= bands.tier4_upper {
        PriceBand::SuperPrice
    } else if price <= bands.tier3.upper {
        PriceBand::VeryAdvantageous
    } else if price <= bands.tier2.upper {
        PriceBand::Advantageous
    } else {
        PriceBand::None
    }
}

/// Repair the request's bands, then classify its price
pub fn classify_request(request: &BandClassifyRequest) -> BandClassification {
    let (bands, repaired) = repair_bands(&request.bands);
    if repaired {
        tracing::debug!(original = ?request.bands, repaired = ?bands, "Price bands repaired");
    }

    let band = classify(request.price, &bands);
    BandClassification {
        band,
        label: band.label().to_string(),
        bands,
        repaired,
    }
}

/// Profit of moving the sale price to each tier ceiling
///
/// Tiers without a ceiling (0) are skipped.
pub fn band_price_options(
    base: &PricingInput,
    bands: &PriceBands,
    tariff: &TariffConstants,
) -> Vec<BandPriceOption> {
    let (bands, _) = repair_bands(bands);
    let current = compute_profit(base, tariff).profit;

    [
        (PriceBand::Advantageous, bands.tier2.upper),
        (PriceBand::VeryAdvantageous, bands.tier3.upper),
        (PriceBand::SuperPrice, bands.tier4_upper),
    ]
    .into_iter()
    .filter(|(_, price)| *price > 0.0)
    .map(|(band, price)| BandPriceOption {
        band,
        price,
        outcome: option_against(current, base, price, tariff),
    })
    .collect()
}
