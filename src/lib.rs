//! # Shortlink
//!
//! A URL shortening service built with Axum and SQLite.
//!
//! ## How codes are made
//!
//! Every distinct long URL is stored exactly once. The store's
//! auto-incrementing row id is encoded in base62 ([`utils::short_code`]) and
//! written back in the same transaction that inserted the row, so a short
//! code is never observed missing and never collides. Submitting a known URL
//! returns its existing code; custom aliases accumulate on the canonical row
//! as secondary tokens.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and repository traits
//! - **Application Layer** ([`application`]) - Shortening and resolution services
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://shortener.db"
//! cargo run
//!
//! curl -X POST localhost:3000/urls -H 'content-type: application/json' \
//!      -d '{"long_url": "https://example.com"}'
//! # {"short_id":"1"}
//!
//! curl localhost:3000/urls/1
//! # {"long_url":"https://example.com"}
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ResolutionService, ShortenOutcome, ShorteningService};
    pub use crate::domain::entities::{CanonicalInsert, CanonicalUrl, CustomAlias, StoreStats};
    pub use crate::domain::repositories::UrlRepository;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
