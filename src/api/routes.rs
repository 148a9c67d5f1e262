//! Application route configuration.

use axum::{middleware, response::Json, routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use super::handlers::user_routes;
use super::middleware::charset_middleware;
use super::openapi::ApiDoc;
use super::AppState;
use crate::config::{API_PREFIX, HEALTH_BODY};

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Liveness only; no dependency checks
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .nest(&format!("{}/users", API_PREFIX), user_routes())
        // Global middleware
        .layer(middleware::from_fn(charset_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
async fn health() -> &'static str {
    HEALTH_BODY
}

/// Generated OpenAPI document
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
