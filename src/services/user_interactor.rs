//! User interactor - Orchestrates user use cases.
//!
//! Sits between the HTTP handlers and the domain: consults the domain
//! service for business rules, then persists through the repository.

use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use std::sync::Arc;
use uuid::Uuid;

use super::dto::{CreateUserInput, DeleteUserInput, GetUserInput, UpdateUserInput, UserOutput};
use crate::domain::{DomainError, User, UserDomainService, UserRepository};
use crate::errors::{AppResult, OptionExt};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User use cases for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserInteractor: Send + Sync {
    /// Get user by ID
    async fn get_user(&self, input: GetUserInput) -> AppResult<UserOutput>;

    /// Register a new user with a unique email
    async fn create_user(&self, input: CreateUserInput) -> AppResult<UserOutput>;

    /// Update name and/or email of an existing user
    async fn update_user(&self, input: UpdateUserInput) -> AppResult<UserOutput>;

    /// Permanently delete user
    async fn delete_user(&self, input: DeleteUserInput) -> AppResult<()>;
}

/// Current instant at the precision PostgreSQL `timestamptz` stores, so a
/// response matches what a later read returns.
fn current_time() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Concrete implementation of UserInteractor.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
    rules: Arc<dyn UserDomainService>,
}

impl UserManager {
    /// Create new interactor with its repository and domain service
    pub fn new(repo: Arc<dyn UserRepository>, rules: Arc<dyn UserDomainService>) -> Self {
        Self { repo, rules }
    }
}

#[async_trait]
impl UserInteractor for UserManager {
    async fn get_user(&self, input: GetUserInput) -> AppResult<UserOutput> {
        let user = self
            .repo
            .find_by_id(&input.id)
            .await?
            .ok_or_user_not_found()?;

        Ok(user.into())
    }

    async fn create_user(&self, input: CreateUserInput) -> AppResult<UserOutput> {
        if !self.rules.validate_unique_email(&input.email).await {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let user = User::new(
            Uuid::new_v4().to_string(),
            input.name,
            input.email,
            current_time(),
        );
        self.repo.create(&user).await?;

        tracing::info!(user_id = %user.id, "User created");
        Ok(user.into())
    }

    async fn update_user(&self, input: UpdateUserInput) -> AppResult<UserOutput> {
        let mut user = self
            .repo
            .find_by_id(&input.id)
            .await?
            .ok_or_user_not_found()?;

        let now = current_time();

        if let Some(email) = input.email {
            if !user.has_email(&email) && !self.rules.validate_unique_email(&email).await {
                return Err(DomainError::EmailAlreadyExists.into());
            }
            user.change_email(email, now);
        }

        if let Some(name) = input.name {
            user.rename(name, now);
        }

        user.touch(now);
        self.repo.update(&user).await?;

        tracing::info!(user_id = %user.id, "User updated");
        Ok(user.into())
    }

    async fn delete_user(&self, input: DeleteUserInput) -> AppResult<()> {
        self.repo.delete(&input.id).await?;

        tracing::info!(user_id = %input.id, "User deleted");
        Ok(())
    }
}
