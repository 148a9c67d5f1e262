//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// HTTP
// =============================================================================

/// Version prefix for all resource routes
pub const API_PREFIX: &str = "/api/v1";

/// Body returned by the liveness endpoint
pub const HEALTH_BODY: &str = "OK";

/// Content type for every JSON response
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Error message for undecodable request bodies
pub const MSG_INVALID_REQUEST_BODY: &str = "invalid request body";

/// Error message returned for any infrastructure failure
pub const MSG_INTERNAL_ERROR: &str = "internal server error";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// Database
// =============================================================================

/// Default PostgreSQL port
pub const DEFAULT_DB_PORT: u16 = 5432;

/// Environment variables that must be set
pub const REQUIRED_ENV_VARS: &[&str] = &["DB_HOST", "DB_USER", "DB_PASSWORD", "DB_NAME"];

/// Startup connection attempts before giving up
pub const DB_CONNECT_ATTEMPTS: u32 = 10;

/// Delay between startup connection attempts in seconds
pub const DB_CONNECT_RETRY_DELAY_SECONDS: u64 = 3;
