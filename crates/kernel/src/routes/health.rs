//! Health check endpoint.
//!
//! Reports how many modules and content types the registry serves.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    modules: usize,
    content_types: usize,
}

/// Health check handler.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let registry = state.content_types();

    Json(HealthResponse {
        status: "healthy",
        modules: registry.modules().len(),
        content_types: registry.len(),
    })
}

/// Create the health check router.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
