//! Short link creation service.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info};

use crate::domain::entities::CanonicalInsert;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::short_code;

/// Result of a single shortening request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenOutcome {
    pub url_id: i64,
    pub short_code: String,
    /// The alias as persisted, when one was requested.
    pub custom_alias: Option<String>,
    /// Whether this call created the canonical row.
    pub created: bool,
}

/// Service that turns long URLs into short codes.
///
/// Each distinct long URL is stored once. Its short code is the base62
/// encoding of the row id assigned by the store. Custom aliases are
/// secondary tokens that accumulate on the canonical row.
pub struct ShorteningService<R: UrlRepository> {
    repository: Arc<R>,
}

impl<R: UrlRepository> ShorteningService<R> {
    /// Creates a new shortening service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Shortens `long_url`, optionally attaching `custom_alias`.
    ///
    /// # Flow
    ///
    /// 1. Insert-or-ignore the canonical row
    /// 2. On first insert, the store assigns `encode(id)` in the same commit;
    ///    otherwise the existing code is read back
    /// 3. If an alias was given, attach it and echo the stored value
    ///
    /// Resubmitting a URL with no alias creates no rows. Resubmitting with a
    /// different alias adds another alias row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `long_url` is blank.
    /// Returns [`AppError::Storage`] on database errors or if an existing row
    /// has no short code.
    pub async fn shorten(
        &self,
        long_url: &str,
        custom_alias: Option<&str>,
    ) -> Result<ShortenOutcome, AppError> {
        if long_url.trim().is_empty() {
            return Err(AppError::bad_request(
                "long_url must not be empty",
                json!({ "field": "long_url" }),
            ));
        }

        let (url_id, short_code, created) =
            match self.repository.insert_or_get_canonical(long_url).await? {
                CanonicalInsert::Created { id, short_code } => {
                    info!(id, %short_code, "Created canonical URL");
                    (id, short_code, true)
                }
                CanonicalInsert::Existing { id } => {
                    let short_code = self
                        .repository
                        .find_short_code_by_long_url(long_url)
                        .await?
                        .ok_or_else(|| {
                            AppError::storage(
                                "Canonical URL has no short code",
                                json!({ "id": id }),
                            )
                        })?;
                    debug!(id, %short_code, "Long URL already shortened");
                    (id, short_code, false)
                }
            };

        let custom_alias = match custom_alias.filter(|alias| !alias.is_empty()) {
            Some(alias) => {
                let stored = self.repository.attach_alias(url_id, alias).await?;
                info!(url_id, alias = %stored.alias, "Attached custom alias");
                Some(stored.alias)
            }
            None => None,
        };

        Ok(ShortenOutcome {
            url_id,
            short_code,
            custom_alias,
            created,
        })
    }

    /// Assigns short codes to canonical rows that lack one.
    ///
    /// Rows are processed `batch_size` at a time until none remain. Returns
    /// the number of rows updated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `batch_size` is not positive.
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn backfill_short_codes(&self, batch_size: i64) -> Result<usize, AppError> {
        if batch_size <= 0 {
            return Err(AppError::bad_request(
                "Batch size must be positive",
                json!({ "batch_size": batch_size }),
            ));
        }

        let mut updated = 0;

        loop {
            let ids = self.repository.find_unassigned(batch_size).await?;
            if ids.is_empty() {
                break;
            }

            for id in ids {
                let code = short_code::encode_row_id(id)?;
                self.repository.assign_short_code(id, &code).await?;
                debug!(id, short_code = %code, "Backfilled short code");
                updated += 1;
            }
        }

        if updated > 0 {
            info!(updated, "Backfilled missing short codes");
        }

        Ok(updated)
    }
}
