//! Handler for short code lookup.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::resolve::ResolveResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the long URL behind a canonical short code.
///
/// # Endpoint
///
/// `GET /urls/{short_code}`
///
/// Custom aliases are not resolved here.
///
/// # Errors
///
/// Returns 404 Not Found with message `shortlink not found` for unknown codes.
pub async fn resolve_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ResolveResponse>, AppError> {
    let long_url = state.resolution_service.resolve(&short_code).await?;

    Ok(Json(ResolveResponse { long_url }))
}
