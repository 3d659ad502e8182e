#![allow(dead_code)]

use axum_test::TestServer;
use chrono::Utc;
use shortlink::infrastructure::persistence::SqliteUrlRepository;
use shortlink::routes::api_router;
use shortlink::state::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;

pub fn create_test_repository(pool: SqlitePool) -> Arc<SqliteUrlRepository> {
    Arc::new(SqliteUrlRepository::new(Arc::new(pool)))
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(create_test_repository(pool))
}

pub fn create_test_server(pool: SqlitePool) -> TestServer {
    TestServer::new(api_router(create_test_state(pool))).unwrap()
}

/// Inserts a canonical row the way a two-step writer would before assigning
/// its code.
pub async fn insert_url_without_code(pool: &SqlitePool, long_url: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO urls (long_url, created_at) VALUES (?, ?) RETURNING id")
        .bind(long_url)
        .bind(Utc::now())
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_urls(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_urls_with_long_url(pool: &SqlitePool, long_url: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls WHERE long_url = ?")
        .bind(long_url)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_aliases_for(pool: &SqlitePool, url_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM custom_aliases WHERE url_id = ?")
        .bind(url_id)
        .fetch_one(pool)
        .await
        .unwrap()
}
