//! Custom alias entity.

use chrono::{DateTime, Utc};

/// A user-chosen token attached to a canonical URL.
///
/// Aliases accumulate: every submission carrying an alias adds a row, and
/// the token is not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomAlias {
    pub id: i64,
    pub url_id: i64,
    pub alias: String,
    pub created_at: DateTime<Utc>,
}

impl CustomAlias {
    pub fn new(id: i64, url_id: i64, alias: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            url_id,
            alias,
            created_at,
        }
    }
}
