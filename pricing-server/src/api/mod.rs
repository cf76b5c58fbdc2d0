//! HTTP API
//!
//! | path | method | description |
//! |------|--------|-------------|
//! | /health | GET | liveness + active tariff |
//! | /api/pricing/tariff | GET | active tariff constants |
//! | /api/pricing/profit | POST | forward profit of a raw record |
//! | /api/pricing/solve | POST | price for a target profit |
//! | /api/pricing/bands/classify | POST | repair bands and classify a price |
//! | /api/pricing/visibility | POST | profit at visibility multipliers |
//! | /api/pricing/batch | POST | batch evaluation of raw rows |

use axum::Router;
use http::{HeaderName, HeaderValue};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;

pub mod health;
pub mod pricing;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // Pricing API
        .merge(pricing::router())
        // Health API
        .merge(health::router())
}

/// Build the fully configured application with middleware and state
///
/// Used by the HTTP server and by in-process tests
pub fn build_app(state: ServerState) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    build_router()
        .layer(
            ServiceBuilder::new()
                // Request ID - set first so the trace span can see it
                .layer(SetRequestIdLayer::new(request_id.clone(), XRequestId))
                // Trace - request tracing
                .layer(TraceLayer::new_for_http())
                // Propagate request ID to response
                .layer(PropagateRequestIdLayer::new(request_id))
                // Compression - gzip responses
                .layer(CompressionLayer::new())
                // CORS - the console runs on another origin
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
