//! Response encoding middleware.
//!
//! JSON responses always declare `charset=utf-8`, and their bodies are
//! guaranteed to be valid UTF-8.

use axum::{
    body::{self, Body},
    extract::Request,
    http::{
        header::{CONTENT_LENGTH, CONTENT_TYPE},
        HeaderMap, HeaderValue,
    },
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::config::JSON_CONTENT_TYPE;
use crate::errors::AppError;

/// Drop every invalid UTF-8 sequence from `bytes`, keeping valid text as is.
pub fn sanitize_string(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("application/json"))
        .unwrap_or(false)
}

/// Normalize the content type and body encoding of JSON responses.
pub async fn charset_middleware(request: Request, next: Next) -> Response {
    let response = next.run(request).await;

    if !is_json(response.headers()) {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => return AppError::internal(format!("failed to buffer response: {}", e)).into_response(),
    };

    let body = if std::str::from_utf8(&bytes).is_ok() {
        Body::from(bytes)
    } else {
        tracing::warn!("Stripped invalid UTF-8 from response body");
        // Length changes when bytes are dropped
        parts.headers.remove(CONTENT_LENGTH);
        Body::from(sanitize_string(&bytes))
    };

    parts
        .headers
        .insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));

    Response::from_parts(parts, body)
}
