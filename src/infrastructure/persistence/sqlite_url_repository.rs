//! SQLite implementation of the URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{SqliteConnection, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::{CanonicalInsert, CanonicalUrl, CustomAlias, StoreStats};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::short_code;

/// SQLite repository for canonical URLs and custom aliases.
///
/// Deduplication relies on the `UNIQUE` constraint on `urls.long_url` and
/// `INSERT ... ON CONFLICT DO NOTHING`, never on a read-then-write check.
pub struct SqliteUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CanonicalUrlRow {
    id: i64,
    short_code: Option<String>,
    long_url: String,
    created_at: DateTime<Utc>,
}

impl From<CanonicalUrlRow> for CanonicalUrl {
    fn from(r: CanonicalUrlRow) -> Self {
        CanonicalUrl::new(r.id, r.short_code, r.long_url, r.created_at)
    }
}

#[derive(sqlx::FromRow)]
struct CustomAliasRow {
    id: i64,
    url_id: i64,
    alias: String,
    created_at: DateTime<Utc>,
}

impl From<CustomAliasRow> for CustomAlias {
    fn from(r: CustomAliasRow) -> Self {
        CustomAlias::new(r.id, r.url_id, r.alias, r.created_at)
    }
}

/// Writes `code` to row `id` if the row has no code or already has `code`.
async fn write_short_code(
    conn: &mut SqliteConnection,
    id: i64,
    code: &str,
) -> Result<(), AppError> {
    let result = sqlx::query(
        r#"
        UPDATE urls
        SET short_code = ?1
        WHERE id = ?2
          AND (short_code IS NULL OR short_code = ?1)
        "#,
    )
    .bind(code)
    .bind(id)
    .execute(&mut *conn)
    .await?;

    if result.rows_affected() > 0 {
        return Ok(());
    }

    let existing: Option<Option<String>> =
        sqlx::query_scalar("SELECT short_code FROM urls WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;

    match existing {
        None => Err(AppError::storage(
            "Canonical URL does not exist",
            json!({ "id": id }),
        )),
        Some(current) => Err(AppError::storage(
            "Canonical URL already has a different short code",
            json!({ "id": id, "short_code": current, "requested": code }),
        )),
    }
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn insert_or_get_canonical(&self, long_url: &str) -> Result<CanonicalInsert, AppError> {
        let mut tx = self.pool.begin().await?;

        let inserted: Option<i64> = sqlx::query_scalar(
            r#"
            INSERT INTO urls (long_url, created_at)
            VALUES (?, ?)
            ON CONFLICT (long_url) DO NOTHING
            RETURNING id
            "#,
        )
        .bind(long_url)
        .bind(Utc::now())
        .fetch_optional(&mut *tx)
        .await?;

        let outcome = match inserted {
            Some(id) => {
                let short_code = short_code::encode_row_id(id)?;
                write_short_code(&mut *tx, id, &short_code).await?;
                CanonicalInsert::Created { id, short_code }
            }
            None => {
                let id: i64 = sqlx::query_scalar("SELECT id FROM urls WHERE long_url = ?")
                    .bind(long_url)
                    .fetch_optional(&mut *tx)
                    .await?
                    .ok_or_else(|| {
                        AppError::storage(
                            "Conflicting canonical URL is not visible",
                            json!({ "long_url": long_url }),
                        )
                    })?;
                CanonicalInsert::Existing { id }
            }
        };

        tx.commit().await?;

        Ok(outcome)
    }

    async fn assign_short_code(&self, id: i64, code: &str) -> Result<(), AppError> {
        let mut conn = self.pool.acquire().await?;
        write_short_code(&mut conn, id, code).await
    }

    async fn find_short_code_by_long_url(
        &self,
        long_url: &str,
    ) -> Result<Option<String>, AppError> {
        let code: Option<Option<String>> =
            sqlx::query_scalar("SELECT short_code FROM urls WHERE long_url = ?")
                .bind(long_url)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(code.flatten())
    }

    async fn attach_alias(&self, url_id: i64, alias: &str) -> Result<CustomAlias, AppError> {
        let row = sqlx::query_as::<_, CustomAliasRow>(
            r#"
            INSERT INTO custom_aliases (url_id, alias, created_at)
            VALUES (?, ?, ?)
            RETURNING id, url_id, alias, created_at
            "#,
        )
        .bind(url_id)
        .bind(alias)
        .bind(Utc::now())
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| match AppError::from(e) {
            AppError::Storage { message, .. } => AppError::storage(
                message,
                json!({ "url_id": url_id, "alias": alias }),
            ),
            other => other,
        })?;

        Ok(row.into())
    }

    async fn find_long_url_by_short_code(&self, code: &str) -> Result<Option<String>, AppError> {
        let long_url = sqlx::query_scalar("SELECT long_url FROM urls WHERE short_code = ? LIMIT 1")
            .bind(code)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(long_url)
    }

    async fn find_by_short_code(&self, code: &str) -> Result<Option<CanonicalUrl>, AppError> {
        let row = sqlx::query_as::<_, CanonicalUrlRow>(
            r#"
            SELECT id, short_code, long_url, created_at
            FROM urls
            WHERE short_code = ?
            LIMIT 1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(CanonicalUrl::from))
    }

    async fn list_aliases(&self, url_id: i64) -> Result<Vec<CustomAlias>, AppError> {
        let rows = sqlx::query_as::<_, CustomAliasRow>(
            r#"
            SELECT id, url_id, alias, created_at
            FROM custom_aliases
            WHERE url_id = ?
            ORDER BY id
            "#,
        )
        .bind(url_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(CustomAlias::from).collect())
    }

    async fn find_unassigned(&self, limit: i64) -> Result<Vec<i64>, AppError> {
        let ids = sqlx::query_scalar(
            "SELECT id FROM urls WHERE short_code IS NULL ORDER BY id LIMIT ?",
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(ids)
    }

    async fn stats(&self) -> Result<StoreStats, AppError> {
        let (urls, unassigned): (i64, i64) = sqlx::query_as(
            "SELECT COUNT(*), COUNT(*) - COUNT(short_code) FROM urls",
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        let aliases: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM custom_aliases")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(StoreStats {
            urls,
            aliases,
            unassigned,
        })
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }
}
