//! Short code resolution service.

use std::sync::Arc;

use serde_json::json;
use tracing::debug;

use crate::domain::entities::{CanonicalUrl, CustomAlias};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::short_code;

/// Message returned for any unknown short code.
pub const NOT_FOUND_MESSAGE: &str = "shortlink not found";

/// Service translating short codes back into long URLs.
///
/// Only canonical short codes are resolved. Custom aliases are stored but
/// are not a lookup path.
pub struct ResolutionService<R: UrlRepository> {
    repository: Arc<R>,
}

impl<R: UrlRepository> ResolutionService<R> {
    /// Creates a new resolution service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Resolves a short code to its long URL.
    ///
    /// Codes containing symbols outside the base62 alphabet cannot have been
    /// issued and are rejected without a database round trip.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no canonical URL has this code.
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        if !short_code::is_valid(code) {
            debug!(code, "Rejected malformed short code");
            return Err(not_found(code));
        }

        self.repository
            .find_long_url_by_short_code(code)
            .await?
            .ok_or_else(|| not_found(code))
    }

    /// Returns the canonical row for `code` together with its aliases.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no canonical URL has this code.
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn inspect(&self, code: &str) -> Result<(CanonicalUrl, Vec<CustomAlias>), AppError> {
        if !short_code::is_valid(code) {
            return Err(not_found(code));
        }

        let url = self
            .repository
            .find_by_short_code(code)
            .await?
            .ok_or_else(|| not_found(code))?;

        let aliases = self.repository.list_aliases(url.id).await?;

        Ok((url, aliases))
    }
}

fn not_found(code: &str) -> AppError {
    AppError::not_found(NOT_FOUND_MESSAGE, json!({ "short_code": code }))
}
