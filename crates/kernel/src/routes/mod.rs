//! HTTP route handlers.

pub mod content_type;
pub mod health;
pub mod module;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router with request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(content_type::router())
        .merge(module::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
