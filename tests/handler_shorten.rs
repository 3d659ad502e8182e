mod common;

use serde_json::{Value, json};
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_shorten_returns_short_id(pool: SqlitePool) {
    let server = common::create_test_server(pool);

    let response = server
        .post("/urls")
        .json(&json!({ "long_url": "https://www.google.com" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body, json!({ "short_id": "1" }));
}

#[sqlx::test]
async fn test_shorten_same_url_twice_returns_same_code(pool: SqlitePool) {
    let server = common::create_test_server(pool.clone());

    let first: Value = server
        .post("/urls")
        .json(&json!({ "long_url": "https://www.google.com" }))
        .await
        .json();
    let second: Value = server
        .post("/urls")
        .json(&json!({ "long_url": "https://www.google.com" }))
        .await
        .json();

    assert_eq!(first["short_id"], second["short_id"]);
    assert_eq!(common::count_urls(&pool).await, 1);
}

#[sqlx::test]
async fn test_shorten_with_alias_echoes_alias(pool: SqlitePool) {
    let server = common::create_test_server(pool.clone());

    server
        .post("/urls")
        .json(&json!({ "long_url": "https://www.google.com" }))
        .await
        .assert_status_ok();

    let response = server
        .post("/urls")
        .json(&json!({
            "long_url": "https://www.fastapi.tiangolo.com",
            "custom_alias": "fastapisite"
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["short_id"], "2");
    assert_eq!(body["custom_alias"], "fastapisite");
    assert_eq!(common::count_aliases_for(&pool, 2).await, 1);
}

#[sqlx::test]
async fn test_shorten_alias_for_existing_url_keeps_code(pool: SqlitePool) {
    let server = common::create_test_server(pool.clone());

    let first: Value = server
        .post("/urls")
        .json(&json!({ "long_url": "https://example.com" }))
        .await
        .json();
    let second: Value = server
        .post("/urls")
        .json(&json!({ "long_url": "https://example.com", "custom_alias": "ex" }))
        .await
        .json();
    let third: Value = server
        .post("/urls")
        .json(&json!({ "long_url": "https://example.com", "custom_alias": "ex2" }))
        .await
        .json();

    assert_eq!(first["short_id"], second["short_id"]);
    assert_eq!(second["short_id"], third["short_id"]);
    assert_eq!(third["custom_alias"], "ex2");
    assert_eq!(common::count_urls(&pool).await, 1);
    assert_eq!(common::count_aliases_for(&pool, 1).await, 2);
}

#[sqlx::test]
async fn test_shorten_empty_alias_is_ignored(pool: SqlitePool) {
    let server = common::create_test_server(pool.clone());

    let response = server
        .post("/urls")
        .json(&json!({ "long_url": "https://example.com", "custom_alias": "" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body.get("custom_alias").is_none());
    assert_eq!(common::count_aliases_for(&pool, 1).await, 0);
}

#[sqlx::test]
async fn test_shorten_accepts_camel_case_fields(pool: SqlitePool) {
    let server = common::create_test_server(pool);

    let response = server
        .post("/urls")
        .json(&json!({ "longUrl": "https://example.com", "customAlias": "ex" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["short_id"], "1");
    assert_eq!(body["custom_alias"], "ex");
}

#[sqlx::test]
async fn test_shorten_missing_long_url(pool: SqlitePool) {
    let server = common::create_test_server(pool.clone());

    let response = server.post("/urls").json(&json!({})).await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "validation_error");
    assert_eq!(common::count_urls(&pool).await, 0);
}

#[sqlx::test]
async fn test_shorten_empty_long_url(pool: SqlitePool) {
    let server = common::create_test_server(pool.clone());

    let response = server
        .post("/urls")
        .json(&json!({ "long_url": "" }))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "validation_error");
    assert_eq!(common::count_urls(&pool).await, 0);
}

#[sqlx::test]
async fn test_shorten_blank_long_url(pool: SqlitePool) {
    let server = common::create_test_server(pool.clone());

    let response = server
        .post("/urls")
        .json(&json!({ "long_url": "   " }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(common::count_urls(&pool).await, 0);
}

#[sqlx::test]
async fn test_shorten_stores_url_verbatim(pool: SqlitePool) {
    let server = common::create_test_server(pool.clone());

    let first: Value = server
        .post("/urls")
        .json(&json!({ "long_url": "https://example.com" }))
        .await
        .json();
    let second: Value = server
        .post("/urls")
        .json(&json!({ "long_url": "https://example.com/" }))
        .await
        .json();

    assert_ne!(first["short_id"], second["short_id"]);
    assert_eq!(common::count_urls(&pool).await, 2);
}

#[sqlx::test]
async fn test_shorten_wrong_type_long_url(pool: SqlitePool) {
    let server = common::create_test_server(pool.clone());

    let response = server.post("/urls").json(&json!({ "long_url": 5 })).await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "validation_error");
    assert!(body["error"]["message"].as_str().unwrap().contains("long_url"));
    assert_eq!(common::count_urls(&pool).await, 0);
}

#[sqlx::test]
async fn test_shorten_malformed_json(pool: SqlitePool) {
    let server = common::create_test_server(pool);

    let response = server
        .post("/urls")
        .content_type("application/json")
        .text("{\"long_url\": ")
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "validation_error");
}
