//! Domain-level errors.
//!
//! These errors represent business rule violations. Every layer shares
//! them, so no layer has to reach into another for its sentinels.

use thiserror::Error;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    /// No user matches the requested id
    #[error("user not found")]
    UserNotFound,

    /// Another user already owns the email (case-insensitive)
    #[error("email already exists")]
    EmailAlreadyExists,
}

/// Failures reported by a repository.
///
/// Backend errors are boxed so the domain never names a storage crate.
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    pub fn storage(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        RepositoryError::Storage(err.into())
    }

    /// Check whether this error carries the given domain sentinel
    pub fn is_domain(&self, kind: DomainError) -> bool {
        matches!(self, RepositoryError::Domain(e) if *e == kind)
    }
}

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;
