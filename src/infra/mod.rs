//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections, retry and migrations
//! - SQL-backed repositories

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::UserStore;
