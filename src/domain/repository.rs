//! Repository contract for the User aggregate.
//!
//! The domain owns the abstraction; `infra::repositories` provides the
//! SQL-backed implementation.

use async_trait::async_trait;

use super::{RepositoryResult, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Lookups return `Ok(None)` when nothing matches; an `Err` always means
/// the store itself failed.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<User>>;

    /// Find user by email, ignoring case. The stored casing is returned.
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;

    /// Insert a fully constructed user
    async fn create(&self, user: &User) -> RepositoryResult<()>;

    /// Persist name, email and updated_at for an existing user.
    ///
    /// Fails with `DomainError::UserNotFound` when no row was affected and
    /// with `DomainError::EmailAlreadyExists` when another user owns the email.
    async fn update(&self, user: &User) -> RepositoryResult<()>;

    /// Delete user by ID.
    ///
    /// Fails with `DomainError::UserNotFound` when no row was affected.
    async fn delete(&self, id: &str) -> RepositoryResult<()>;
}
