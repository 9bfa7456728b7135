use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

use crate::startup::AppState;

/// Health check endpoint for container probes. Reports whether the
/// generation capability is configured without touching the remote service.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let generation = if state.text_provider.is_some() {
        "ready"
    } else {
        "unconfigured"
    };

    Json(json!({
        "status": "ok",
        "service": "contract-service",
        "version": env!("CARGO_PKG_VERSION"),
        "generation": generation
    }))
}
