//! Service Container - Centralized service access.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{UserInteractor, UserManager};
use crate::domain::{UserRepository, UserRules};
use crate::infra::UserStore;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get user interactor
    fn users(&self) -> Arc<dyn UserInteractor>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    user_interactor: Arc<dyn UserInteractor>,
}

impl Services {
    /// Create a service container around an already built interactor
    pub fn new(user_interactor: Arc<dyn UserInteractor>) -> Self {
        Self { user_interactor }
    }

    /// Wire repository, domain service and interactor over one repository.
    ///
    /// The domain service and the interactor share the same repository.
    pub fn from_repository(repo: Arc<dyn UserRepository>) -> Self {
        let rules = Arc::new(UserRules::new(repo.clone()));
        let user_interactor = Arc::new(UserManager::new(repo, rules));

        Self { user_interactor }
    }

    /// Create service container from a database connection
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self::from_repository(Arc::new(UserStore::new(db)))
    }
}

impl ServiceContainer for Services {
    fn users(&self) -> Arc<dyn UserInteractor> {
        self.user_interactor.clone()
    }
}
