//! Application settings loaded from environment variables.

use std::env;

use thiserror::Error;

use super::constants::{
    DEFAULT_DB_PORT, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, REQUIRED_ENV_VARS,
};

/// Configuration loading errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("required environment variables are not set: {}", .0.join(", "))]
    MissingVars(Vec<String>),

    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    db_password: String,
    pub db_name: String,
    pub server_host: String,
    pub server_port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("db_host", &self.db_host)
            .field("db_port", &self.db_port)
            .field("db_user", &self.db_user)
            .field("db_password", &"[REDACTED]")
            .field("db_name", &self.db_name)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Empty values count as unset. All missing required keys are
    /// reported together.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let missing: Vec<String> = REQUIRED_ENV_VARS
            .iter()
            .filter(|key| get(**key).is_none())
            .map(|key| key.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(ConfigError::MissingVars(missing));
        }

        let parse_port = |key: &str, default: u16| -> Result<u16, ConfigError> {
            match get(key) {
                Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                    name: key.to_string(),
                    value,
                }),
                None => Ok(default),
            }
        };

        Ok(Self {
            db_host: get("DB_HOST").unwrap_or_default(),
            db_port: parse_port("DB_PORT", DEFAULT_DB_PORT)?,
            db_user: get("DB_USER").unwrap_or_default(),
            db_password: get("DB_PASSWORD").unwrap_or_default(),
            db_name: get("DB_NAME").unwrap_or_default(),
            server_host: get("SERVER_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
            server_port: parse_port("SERVER_PORT", DEFAULT_SERVER_PORT)?,
        })
    }

    /// PostgreSQL connection URL.
    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.db_user, self.db_password, self.db_host, self.db_port, self.db_name
        )
    }
}
