//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use layered_user_api::domain::{
    DomainError, RepositoryError, RepositoryResult, User, UserRepository,
};
use layered_user_api::services::{Services, UserInteractor};
use layered_user_api::{create_router, AppState};

// =============================================================================
// In-memory repository
// =============================================================================

/// Repository backed by a vector, with the same case-insensitive email
/// uniqueness the database index enforces.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
    fail_reads: bool,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every read fails with an infrastructure error.
    pub fn failing() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            fail_reads: true,
        }
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    fn check_reads(&self) -> RepositoryResult<()> {
        if self.fail_reads {
            return Err(RepositoryError::storage("storage unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<User>> {
        self.check_reads()?;
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>> {
        self.check_reads()?;
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.has_email(email))
            .cloned())
    }

    async fn create(&self, user: &User) -> RepositoryResult<()> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.has_email(&user.email)) {
            return Err(DomainError::EmailAlreadyExists.into());
        }
        users.push(user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> RepositoryResult<()> {
        let mut users = self.users.lock().unwrap();
        if users
            .iter()
            .any(|u| u.id != user.id && u.has_email(&user.email))
        {
            return Err(DomainError::EmailAlreadyExists.into());
        }
        match users.iter_mut().find(|u| u.id == user.id) {
            Some(stored) => {
                *stored = user.clone();
                Ok(())
            }
            None => Err(DomainError::UserNotFound.into()),
        }
    }

    async fn delete(&self, id: &str) -> RepositoryResult<()> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != id);
        if users.len() == before {
            return Err(DomainError::UserNotFound.into());
        }
        Ok(())
    }
}

// =============================================================================
// Wiring
// =============================================================================

/// Real interactor and domain service over the given repository.
pub fn interactor(repo: Arc<InMemoryUserRepository>) -> Arc<dyn UserInteractor> {
    use layered_user_api::services::ServiceContainer;

    Services::from_repository(repo).users()
}

/// Full application router over the given repository.
pub fn app(repo: Arc<InMemoryUserRepository>) -> axum::Router {
    create_router(AppState::new(interactor(repo)))
}
