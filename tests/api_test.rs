//! Integration tests for API endpoints.
//!
//! Drive the full router (middleware included) over the real interactor
//! and domain service, with an in-memory repository instead of PostgreSQL.

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use common::{app, InMemoryUserRepository};

// =============================================================================
// Helpers
// =============================================================================

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Option<String>, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, content_type, value)
}

async fn create(app: &Router, name: &str, email: &str) -> (StatusCode, Value) {
    let (status, _, body) = send(
        app,
        "POST",
        "/api/v1/users",
        Some(json!({ "name": name, "email": email })),
    )
    .await;
    (status, body)
}

// =============================================================================
// Health & docs
// =============================================================================

#[tokio::test]
async fn test_health_returns_ok() {
    let app = app(Arc::new(InMemoryUserRepository::new()));

    let (status, content_type, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("OK".to_string()));
    assert_eq!(content_type.as_deref(), Some("text/plain; charset=utf-8"));
}

#[tokio::test]
async fn test_openapi_document_served() {
    let app = app(Arc::new(InMemoryUserRepository::new()));

    let (status, _, body) = send(&app, "GET", "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/v1/users/{id}"].is_object());
}

// =============================================================================
// User lifecycle
// =============================================================================

#[tokio::test]
async fn test_create_duplicate_then_unknown() {
    let app = app(Arc::new(InMemoryUserRepository::new()));

    let (status, body) = create(&app, "Test User", "test@example.com").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["email"], "test@example.com");
    assert_eq!(body["name"], "Test User");
    assert_eq!(body["created_at"], body["updated_at"]);

    let (status, body) = create(&app, "Someone Else", "test@example.com").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "email already exists" }));

    let (status, _, body) = send(&app, "GET", "/api/v1/users/unknown-id", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "user not found" }));
}

#[tokio::test]
async fn test_json_responses_declare_utf8() {
    let app = app(Arc::new(InMemoryUserRepository::new()));

    let (_, content_type, _) = send(
        &app,
        "POST",
        "/api/v1/users",
        Some(json!({ "name": "Zoë", "email": "zoe@example.com" })),
    )
    .await;
    assert_eq!(content_type.as_deref(), Some("application/json; charset=utf-8"));

    let (_, content_type, _) = send(&app, "GET", "/api/v1/users/unknown-id", None).await;
    assert_eq!(content_type.as_deref(), Some("application/json; charset=utf-8"));
}

#[tokio::test]
async fn test_duplicate_email_ignores_case() {
    let repo = Arc::new(InMemoryUserRepository::new());
    let app = app(repo.clone());

    let (status, _) = create(&app, "First", "Case@Example.com").await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = create(&app, "Second", "case@EXAMPLE.COM").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "email already exists");
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn test_get_returns_created_user() {
    let app = app(Arc::new(InMemoryUserRepository::new()));

    let (_, created) = create(&app, "Test User", "test@example.com").await;
    let id = created["id"].as_str().unwrap();

    let (status, _, fetched) = send(&app, "GET", &format!("/api/v1/users/{}", id), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_update_and_delete() {
    let app = app(Arc::new(InMemoryUserRepository::new()));

    let (_, created) = create(&app, "Test User", "test@example.com").await;
    let uri = format!("/api/v1/users/{}", created["id"].as_str().unwrap());

    let (status, _, updated) = send(&app, "PUT", &uri, Some(json!({ "name": "Renamed" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Renamed");
    assert_eq!(updated["email"], "test@example.com");
    assert_eq!(updated["created_at"], created["created_at"]);

    let (status, _, body) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _, _) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _, body) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "user not found");
}

#[tokio::test]
async fn test_update_to_taken_email_rejected() {
    let app = app(Arc::new(InMemoryUserRepository::new()));

    create(&app, "First", "first@example.com").await;
    let (_, second) = create(&app, "Second", "second@example.com").await;
    let uri = format!("/api/v1/users/{}", second["id"].as_str().unwrap());

    let (status, _, body) = send(&app, "PUT", &uri, Some(json!({ "email": "FIRST@example.com" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "email already exists");
}

#[tokio::test]
async fn test_update_unknown_user_is_404() {
    let app = app(Arc::new(InMemoryUserRepository::new()));

    let (status, _, body) = send(
        &app,
        "PUT",
        "/api/v1/users/unknown-id",
        Some(json!({ "name": "Nobody" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "user not found");
}

// =============================================================================
// Malformed input
// =============================================================================

#[tokio::test]
async fn test_malformed_json_is_400() {
    let repo = Arc::new(InMemoryUserRepository::new());
    let app = app(repo.clone());

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/users")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": \"Test"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "error": "invalid request body" }));
    assert_eq!(repo.len(), 0);
}

#[tokio::test]
async fn test_create_accepts_form_content_type() {
    let app = app(Arc::new(InMemoryUserRepository::new()));

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/users")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(r#"{"name":"A","email":"a@example.com"}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_empty_fields_rejected() {
    let repo = Arc::new(InMemoryUserRepository::new());
    let app = app(repo.clone());

    let (status, body) = create(&app, "Test User", "").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "email is required");
    assert_eq!(repo.len(), 0);
}

#[tokio::test]
async fn test_lookup_failure_blocks_creation() {
    let app = app(Arc::new(InMemoryUserRepository::failing()));

    let (status, body) = create(&app, "Test User", "test@example.com").await;

    // Uniqueness cannot be confirmed, so the email counts as taken
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "email already exists");
}

#[tokio::test]
async fn test_get_with_failing_store_is_500() {
    let app = app(Arc::new(InMemoryUserRepository::failing()));

    let (status, _, body) = send(&app, "GET", "/api/v1/users/some-id", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "internal server error" }));
}
