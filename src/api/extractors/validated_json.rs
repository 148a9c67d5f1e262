//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;

/// Validated JSON extractor that automatically validates requests.
///
/// The body is decoded as JSON whatever `Content-Type` says. A body that
/// cannot be read or decoded as `T` becomes [`AppError::InvalidBody`]; a
/// decoded body that fails validation becomes [`AppError::Validation`].
///
/// # Example
///
/// ```rust,ignore
/// use layered_user_api::api::extractors::ValidatedJson;
/// use layered_user_api::services::CreateUserInput;
///
/// async fn create_user(ValidatedJson(payload): ValidatedJson<CreateUserInput>) {
///     // payload.name and payload.email are non-empty here
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::debug!("Unreadable request body: {}", e.body_text());
            AppError::InvalidBody
        })?;

        let value: T = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::debug!("Rejected request body: {}", e);
            AppError::InvalidBody
        })?;

        value
            .validate()
            .map_err(|e| AppError::validation(format_validation_errors(&e)))?;

        Ok(ValidatedJson(value))
    }
}

/// Format validation errors into a user-friendly string.
///
/// Fields are sorted so the message is stable across runs.
fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}
