//! Health check route
//!
//! | path | method | description |
//! |------|--------|-------------|
//! | /health | GET | liveness + active tariff |
//!
//! ```json
//! {
//!   "status": "ok",
//!   "version": "0.1.0",
//!   "environment": "development",
//!   "tariff_effective_from": "2025-01-01"
//! }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use chrono::NaiveDate;
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// ok | degraded
    status: &'static str,
    version: &'static str,
    environment: String,
    /// Start of the tariff in force today, absent when none is
    #[serde(skip_serializing_if = "Option::is_none")]
    tariff_effective_from: Option<NaiveDate>,
}

/// GET /health
async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let tariff = state.tariffs.active().ok();
    Json(HealthResponse {
        status: if tariff.is_some() { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
        tariff_effective_from: tariff.map(|t| t.effective_from),
    })
}
