//! API routes module

pub mod health;
pub mod pets;

use axum::{Router, middleware, routing::get};
use observability::{metrics_handler, metrics_middleware};

use crate::state::AppState;

/// Create all API routes, mounted at the root
///
/// Request metrics are recorded for the pets and readiness routes only, so
/// scrapes of `/metrics` don't count themselves.
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(pets::router(state))
        .merge(health::router(state.clone()))
        .route_layer(middleware::from_fn(metrics_middleware))
        .route("/metrics", get(metrics_handler))
}
