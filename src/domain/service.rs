//! Domain service - business rules spanning the User aggregate.

use async_trait::async_trait;
use std::sync::Arc;

use super::UserRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Stateless business rules over repository reads.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserDomainService: Send + Sync {
    /// Returns `true` only when no user owns `email` (case-insensitive).
    ///
    /// Lookup failures yield `false`: an unknown answer never counts as unique.
    async fn validate_unique_email(&self, email: &str) -> bool;
}

/// Concrete implementation of UserDomainService using repository.
pub struct UserRules {
    repo: Arc<dyn UserRepository>,
}

impl UserRules {
    /// Create new domain service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserDomainService for UserRules {
    async fn validate_unique_email(&self, email: &str) -> bool {
        match self.repo.find_by_email(email).await {
            Ok(None) => true,
            Ok(Some(_)) => false,
            Err(e) => {
                tracing::warn!("Email uniqueness lookup failed, treating as taken: {}", e);
                false
            }
        }
    }
}
