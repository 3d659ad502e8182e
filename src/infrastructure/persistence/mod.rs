//! SQLite persistence.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! - [`SqliteUrlRepository`] - Canonical URL and custom alias storage
//! - [`pool`] - Connection pool setup and embedded migrations

pub mod pool;
pub mod sqlite_url_repository;

pub use sqlite_url_repository::SqliteUrlRepository;
