//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion. `IntoResponse` below is the
//! only place errors are turned into status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::config::{MSG_INTERNAL_ERROR, MSG_INVALID_REQUEST_BODY};
use crate::domain::{DomainError, RepositoryError};

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Business rule violations (not-found, duplicate email)
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Malformed input
    #[error("invalid request body")]
    InvalidBody,

    #[error("{0}")]
    Validation(String),

    // Infrastructure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body: `{"error": "..."}`
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "user not found")]
    pub error: String,
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Domain(DomainError::UserNotFound) => StatusCode::NOT_FOUND,
            AppError::Domain(DomainError::EmailAlreadyExists) => StatusCode::BAD_REQUEST,
            AppError::InvalidBody | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Storage(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            AppError::Domain(e) => e.to_string(),
            AppError::InvalidBody => MSG_INVALID_REQUEST_BODY.to_string(),
            AppError::Validation(msg) => msg.clone(),

            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                MSG_INTERNAL_ERROR.to_string()
            }
            AppError::Storage(e) => {
                tracing::error!("Storage error: {}", e);
                MSG_INTERNAL_ERROR.to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                MSG_INTERNAL_ERROR.to_string()
            }
        }
    }

    /// Check whether this error carries the given domain sentinel
    pub fn is_domain(&self, kind: DomainError) -> bool {
        matches!(self, AppError::Domain(e) if *e == kind)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: self.user_message(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Domain(e) => AppError::Domain(e),
            RepositoryError::Storage(e) => AppError::Storage(e),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_user_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_user_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::Domain(DomainError::UserNotFound))
    }
}

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
