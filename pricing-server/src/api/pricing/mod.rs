//! Pricing API module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/pricing", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/tariff", get(handler::tariff))
        .route("/profit", post(handler::profit))
        .route("/solve", post(handler::solve))
        .route("/bands/classify", post(handler::classify_bands))
        .route("/visibility", post(handler::visibility))
        .route("/batch", post(handler::batch))
}
