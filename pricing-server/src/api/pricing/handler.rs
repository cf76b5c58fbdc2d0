//! Pricing API Handlers
//!
//! Every handler takes a snapshot of today's tariff and runs the pure
//! engine over it.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use shared::models::{
    BandQuote, BandQuoteRequest, BatchReport, BatchRequest, PriceSolution, ProfitRequest,
    ProfitResponse, SolveRequest, TariffConstants, VisibilityReport, VisibilityRequest,
};

use crate::core::ServerState;
use crate::pricing;
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode, ok};

/// GET /api/pricing/tariff - tariff in force today
pub async fn tariff(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<TariffConstants>>> {
    Ok(ok(state.tariffs.active()?))
}

/// POST /api/pricing/profit - forward profit of one raw record
pub async fn profit(
    State(state): State<ServerState>,
    payload: Result<Json<ProfitRequest>, JsonRejection>,
) -> AppResult<Json<ApiResponse<ProfitResponse>>> {
    let Json(req) = payload?;
    let tariff = state.tariffs.active()?;

    let normalized =
        pricing::normalize_record(&req.record, &tariff, state.cost_fallback(req.cost_fallback));
    let result = pricing::compute_profit(&normalized.input, &tariff);

    Ok(ok(ProfitResponse {
        profit_available: normalized.profit_available(),
        normalized,
        result,
    }))
}

/// POST /api/pricing/solve - sale price for a target profit
pub async fn solve(
    State(state): State<ServerState>,
    payload: Result<Json<SolveRequest>, JsonRejection>,
) -> AppResult<Json<ApiResponse<PriceSolution>>> {
    let Json(req) = payload?;
    require_non_negative(&[("cost", req.cost), ("shipping", req.shipping)])?;
    let tariff = state.tariffs.active()?;

    Ok(ok(pricing::solve_price(&req, &tariff)))
}

/// POST /api/pricing/bands/classify - repair bands, classify, price options
pub async fn classify_bands(
    State(state): State<ServerState>,
    payload: Result<Json<BandQuoteRequest>, JsonRejection>,
) -> AppResult<Json<ApiResponse<BandQuote>>> {
    let Json(req) = payload?;
    let classification = pricing::classify_request(&req.classify);

    let options = match &req.product {
        Some(product) => {
            let tariff = state.tariffs.active()?;
            let normalized =
                pricing::normalize_record(product, &tariff, state.cost_fallback(None));
            pricing::band_price_options(&normalized.input, &classification.bands, &tariff)
        }
        None => Vec::new(),
    };

    Ok(ok(BandQuote {
        classification,
        options,
    }))
}

/// POST /api/pricing/visibility - profit at visibility multipliers
pub async fn visibility(
    State(state): State<ServerState>,
    payload: Result<Json<VisibilityRequest>, JsonRejection>,
) -> AppResult<Json<ApiResponse<VisibilityReport>>> {
    let Json(req) = payload?;
    let tariff = state.tariffs.active()?;
    let base = pricing::normalize_record(&req.record, &tariff, state.cost_fallback(None)).input;

    let custom = match req.option_price {
        Some(price) if price.is_finite() && price > 0.0 => {
            Some(pricing::evaluate_option(&base, price, &tariff))
        }
        Some(price) => {
            return Err(AppError::with_message(
                ErrorCode::ValueOutOfRange,
                "option_price must be a positive number",
            )
            .with_detail("option_price", price.to_string()));
        }
        None => None,
    };

    Ok(ok(VisibilityReport {
        current_profit: pricing::compute_profit(&base, &tariff).profit,
        options: pricing::evaluate_visibility_options(&base, &tariff),
        custom,
    }))
}

/// POST /api/pricing/batch - evaluate an import
pub async fn batch(
    State(state): State<ServerState>,
    payload: Result<Json<BatchRequest>, JsonRejection>,
) -> AppResult<Json<ApiResponse<BatchReport>>> {
    let Json(req) = payload?;
    if req.rows.is_empty() {
        return Err(AppError::new(ErrorCode::BatchEmpty));
    }
    let limit = state.config.max_batch_rows;
    if req.rows.len() > limit {
        return Err(AppError::new(ErrorCode::BatchTooLarge)
            .with_detail("rows", req.rows.len())
            .with_detail("limit", limit));
    }

    let tariff = state.tariffs.active()?;
    let report = pricing::evaluate_batch(&req.rows, &tariff, state.cost_fallback(req.cost_fallback));
    tracing::info!(
        rows = report.summary.rows,
        cost_missing = report.summary.cost_missing,
        invalid = report.summary.invalid,
        "Batch evaluated"
    );

    Ok(ok(report))
}

fn require_non_negative(fields: &[(&'static str, f64)]) -> AppResult<()> {
    for (field, value) in fields {
        if *value < 0.0 {
            return Err(AppError::with_message(
                ErrorCode::ValueOutOfRange,
                format!("{} must not be negative", field),
            )
            .with_detail("field", *field));
        }
    }
    Ok(())
}
