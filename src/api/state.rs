//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{ServiceContainer, Services, UserInteractor};

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// User interactor
    pub user_interactor: Arc<dyn UserInteractor>,
}

impl AppState {
    /// Create application state over a connected database.
    ///
    /// The connection pool is handed to the repository through its
    /// constructor; nothing is stored globally.
    pub fn from_database(database: &Database) -> Self {
        let container = Services::from_connection(database.get_connection());
        Self::from_container(&container)
    }

    /// Create application state from any service container.
    pub fn from_container(container: &dyn ServiceContainer) -> Self {
        Self::new(container.users())
    }

    /// Create new application state with a manually injected interactor.
    pub fn new(user_interactor: Arc<dyn UserInteractor>) -> Self {
        Self { user_interactor }
    }
}
