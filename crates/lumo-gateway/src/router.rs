//! Axum router wiring.
//!
//! `POST /execute` plus the operational endpoints. The body limit comes from
//! config; oversize bodies surface as a JSON 413 from the handler.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{app_state::AppState, ops, transport};

pub fn build_router(state: AppState) -> Router {
    let max_body_bytes = state.cfg().gateway.max_body_bytes;

    Router::new()
        .route("/execute", post(transport::http::execute))
        .route("/health", get(ops::health))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
