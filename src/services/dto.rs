//! Data transfer objects at the handler / interactor boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::User;

/// Input for fetching a single user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetUserInput {
    pub id: String,
}

/// User creation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserInput {
    /// User display name
    #[validate(length(min = 1, message = "name is required"))]
    #[schema(example = "John Doe")]
    pub name: String,
    /// User email address
    #[validate(length(min = 1, message = "email is required"))]
    #[schema(example = "user@example.com")]
    pub email: String,
}

/// Partial user update; the id comes from the route
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdateUserInput {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Input for deleting a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteUserInput {
    pub id: String,
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserOutput {
    /// Unique user identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: String,
    /// User display name
    #[schema(example = "John Doe")]
    pub name: String,
    /// User email address, as originally stored
    #[schema(example = "user@example.com")]
    pub email: String,
    /// Creation timestamp (RFC 3339)
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp (RFC 3339)
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserOutput {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
