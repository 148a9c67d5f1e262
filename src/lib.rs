//! Layered User API - user CRUD over PostgreSQL
//!
//! Requests flow through four layers, each depending only on the
//! trait of the layer below it.
//!
//! # Architecture Layers
//!
//! - **api**: HTTP handlers, middleware, and routes
//! - **services**: Interactors (use cases) and DTOs
//! - **domain**: Entity, repository contract, domain service, error kinds
//! - **infra**: SeaORM repository, database bootstrap and migrations
//! - **cli** / **commands**: Command-line interface
//! - **config**: Application configuration and constants
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::Config;
pub use domain::{DomainError, User};
pub use errors::{AppError, AppResult};
