//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /urls`               - Shorten a long URL
//! - `GET  /urls/{short_code}`  - Resolve a short code
//! - `GET  /health`             - Health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Routes and tracing without path normalization.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::url_routes())
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(api_router(state))
}
