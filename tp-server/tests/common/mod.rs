#![allow(dead_code)]

use tp_auth::TokenIssuer;
use tp_server::build_router;
use tp_service::{AppState, LogMailer};

use std::sync::Arc;

use axum::body::Body;
use axum::Router;
use http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

pub const TEST_SECRET: &[u8] = b"test-secret-that-is-long-enough-for-hs256";

/// Full application router over an in-memory database.
pub async fn test_app() -> Router {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    tp_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    let tokens = Arc::new(TokenIssuer::with_hs256(TEST_SECRET));
    let mailer = Arc::new(LogMailer::new(
        "http://localhost:4200/verify-email".to_string(),
        "no-reply@localhost".to_string(),
    ));

    build_router(AppState::new(pool, tokens, mailer))
}

/// POST a JSON body and parse the JSON response.
pub async fn post_json(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

    (status, json)
}

/// GET a JSON endpoint.
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

    (status, json)
}

pub fn register_body(email: &str, roles: &[&str]) -> serde_json::Value {
    serde_json::json!({
        "email": email,
        "password": "secret123",
        "roles": roles,
        "name": "Jo",
        "surname": "Doe",
    })
}
