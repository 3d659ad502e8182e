//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};
use tracing::warn;

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Reports whether the store answers a trivial query.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: store reachable
/// - **503 Service Unavailable**: store check failed
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let database = match state.check_database().await {
        Ok(()) => CheckStatus::ok(),
        Err(e) => {
            warn!(error = %e, "Health check failed");
            CheckStatus::failed(e.to_string())
        }
    };

    let response = HealthResponse::from_checks(HealthChecks { database });
    let status = if response.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
