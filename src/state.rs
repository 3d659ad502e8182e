//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{ResolutionService, ShorteningService};
use crate::domain::repositories::UrlRepository;
use crate::infrastructure::persistence::SqliteUrlRepository;

/// Services shared by all request handlers.
///
/// Holds no per-request mutable state; everything durable lives in the store.
#[derive(Clone)]
pub struct AppState {
    pub shortening_service: Arc<ShorteningService<SqliteUrlRepository>>,
    pub resolution_service: Arc<ResolutionService<SqliteUrlRepository>>,
    pub url_repository: Arc<SqliteUrlRepository>,
}

impl AppState {
    /// Builds the services on top of a single repository.
    pub fn new(url_repository: Arc<SqliteUrlRepository>) -> Self {
        Self {
            shortening_service: Arc::new(ShorteningService::new(url_repository.clone())),
            resolution_service: Arc::new(ResolutionService::new(url_repository.clone())),
            url_repository,
        }
    }

    /// Checks that the backing store answers.
    pub async fn check_database(&self) -> Result<(), crate::error::AppError> {
        self.url_repository.ping().await
    }
}
