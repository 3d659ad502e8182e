//! DTOs for short code lookup.

use serde::Serialize;

/// Long URL behind a short code.
#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub long_url: String,
}
