//! API route configuration.

use crate::api::handlers::{resolve_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Short link routes.
///
/// # Endpoints
///
/// - `POST /urls`               - Shorten a long URL (optionally with a custom alias)
/// - `GET  /urls/{short_code}`  - Look up the long URL for a short code
pub fn url_routes() -> Router<AppState> {
    Router::new()
        .route("/urls", post(shorten_handler))
        .route("/urls/{short_code}", get(resolve_handler))
}
