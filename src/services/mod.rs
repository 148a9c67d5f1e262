//! Application services layer - Use cases.
//!
//! Interactors orchestrate domain rules and persistence to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

pub mod container;
pub mod dto;
mod user_interactor;

// Service Container
pub use container::{ServiceContainer, Services};

// DTOs
pub use dto::{CreateUserInput, DeleteUserInput, GetUserInput, UpdateUserInput, UserOutput};

// Interactor trait and implementation
pub use user_interactor::{UserInteractor, UserManager};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
#[cfg(any(test, feature = "test-utils"))]
pub use user_interactor::MockUserInteractor;
