//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.
//!
//! DDD: Domain layer has NO external dependencies (except error types).
//! Contains: Entities, Repository contracts, Domain Services.

pub mod error;
pub mod repository;
pub mod service;
pub mod user;

pub use error::{DomainError, RepositoryError, RepositoryResult};
pub use repository::UserRepository;
pub use service::{UserDomainService, UserRules};
pub use user::User;

#[cfg(any(test, feature = "test-utils"))]
pub use repository::MockUserRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use service::MockUserDomainService;
