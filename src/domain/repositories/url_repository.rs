//! Repository trait for canonical URLs and their custom aliases.

use crate::domain::entities::{CanonicalInsert, CanonicalUrl, CustomAlias, StoreStats};
use crate::error::AppError;
use async_trait::async_trait;

/// Persistence contract over the `urls` and `custom_aliases` collections.
///
/// Every mutating operation is committed before it returns `Ok`.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_url.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a canonical row for `long_url` unless one already exists.
    ///
    /// Uniqueness of `long_url` is enforced by the store, so concurrent
    /// callers submitting the same URL produce exactly one row. When a row is
    /// inserted, its short code is written in the same transaction and
    /// returned in [`CanonicalInsert::Created`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn insert_or_get_canonical(&self, long_url: &str) -> Result<CanonicalInsert, AppError>;

    /// Sets the short code of the row with the given id.
    ///
    /// Succeeds without change if the row already carries `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the row does not exist, already has a
    /// different code, or on database errors.
    async fn assign_short_code(&self, id: i64, code: &str) -> Result<(), AppError>;

    /// Returns the short code previously assigned to `long_url`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(code))` if the URL is stored and has a code
    /// - `Ok(None)` if the URL is unknown or has no code yet
    async fn find_short_code_by_long_url(&self, long_url: &str)
    -> Result<Option<String>, AppError>;

    /// Creates a custom alias row referencing `url_id`.
    ///
    /// Returns the alias exactly as persisted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if `url_id` references no canonical row,
    /// or on database errors.
    async fn attach_alias(&self, url_id: i64, alias: &str) -> Result<CustomAlias, AppError>;

    /// Looks up the long URL for a canonical short code.
    async fn find_long_url_by_short_code(&self, code: &str) -> Result<Option<String>, AppError>;

    /// Fetches the full canonical row for a short code.
    async fn find_by_short_code(&self, code: &str) -> Result<Option<CanonicalUrl>, AppError>;

    /// Lists aliases attached to a canonical row, oldest first.
    async fn list_aliases(&self, url_id: i64) -> Result<Vec<CustomAlias>, AppError>;

    /// Returns up to `limit` ids of canonical rows that have no short code.
    async fn find_unassigned(&self, limit: i64) -> Result<Vec<i64>, AppError>;

    /// Counts rows in both collections.
    async fn stats(&self) -> Result<StoreStats, AppError>;

    /// Verifies the store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
