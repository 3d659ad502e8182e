//! Canonical URL entity.

use chrono::{DateTime, Utc};

/// The stored record for a distinct long URL.
///
/// `short_code` is the base62 encoding of `id`. Rows written by this crate
/// receive it in the same transaction as the insert; it is only `None` for
/// rows left behind by an older two-step writer until they are backfilled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalUrl {
    pub id: i64,
    pub short_code: Option<String>,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

impl CanonicalUrl {
    pub fn new(
        id: i64,
        short_code: Option<String>,
        long_url: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            short_code,
            long_url,
            created_at,
        }
    }
}

/// Result of inserting a long URL that may already be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonicalInsert {
    /// A new row was inserted and its short code written in the same commit.
    Created { id: i64, short_code: String },
    /// A row for the long URL already existed and was left untouched.
    Existing { id: i64 },
}

impl CanonicalInsert {
    pub fn id(&self) -> i64 {
        match self {
            CanonicalInsert::Created { id, .. } | CanonicalInsert::Existing { id } => *id,
        }
    }

    pub fn was_created(&self) -> bool {
        matches!(self, CanonicalInsert::Created { .. })
    }
}

/// Row counts across both collections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStats {
    pub urls: i64,
    pub aliases: i64,
    pub unassigned: i64,
}
