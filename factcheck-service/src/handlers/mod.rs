//! HTTP handlers for the fact-check service.

pub mod factcheck;

use crate::services::metrics::get_metrics;
use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Liveness check.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "factcheck-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness check: the service can only do useful work with an API key.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    if state.completion_provider.is_some() {
        (StatusCode::OK, Json(json!({ "status": "ready" })))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "reason": "OpenAI API key is not configured"
            })),
        )
    }
}

pub async fn metrics() -> impl IntoResponse {
    get_metrics()
}
