//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or returns the existing) short code for a long URL.
///
/// # Endpoint
///
/// `POST /urls`
///
/// # Request Body
///
/// ```json
/// { "long_url": "https://example.com", "custom_alias": "example" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_id": "1", "custom_alias": "example" }
/// ```
///
/// `custom_alias` is present only when one was supplied, and echoes the
/// value as stored.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not a JSON object of the expected
/// shape, or if `long_url` is missing or empty.
/// Returns 500 Internal Server Error on storage failures.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let outcome = state
        .shortening_service
        .shorten(&payload.long_url, payload.custom_alias.as_deref())
        .await?;

    Ok(Json(ShortenResponse {
        short_id: outcome.short_code,
        custom_alias: outcome.custom_alias,
    }))
}
