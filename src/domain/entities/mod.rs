//! Core domain entities.
//!
//! - [`CanonicalUrl`] - The single stored record for a distinct long URL
//! - [`CustomAlias`] - A user-chosen token pointing at a canonical URL
//! - [`CanonicalInsert`] - Outcome of the insert-or-ignore on a long URL
//! - [`StoreStats`] - Row counts for operators

pub mod canonical_url;
pub mod custom_alias;

pub use canonical_url::{CanonicalInsert, CanonicalUrl, StoreStats};
pub use custom_alias::CustomAlias;
