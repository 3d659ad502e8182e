mod common;

use axum::http::StatusCode;
use serde_json::Value;
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_health_ok(pool: SqlitePool) {
    let server = common::create_test_server(pool);

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["database"]["status"], "ok");
}

#[sqlx::test]
async fn test_health_degraded_when_pool_closed(pool: SqlitePool) {
    let server = common::create_test_server(pool.clone());
    pool.close().await;

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["database"]["status"], "error");
}
