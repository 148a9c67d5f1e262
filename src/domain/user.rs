//! User domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque identifier, assigned once at creation
    pub id: String,
    pub name: String,
    /// Unique across users, compared case-insensitively
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user; both timestamps are set to the same instant.
    pub fn new(id: String, name: String, email: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            email,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether this user owns the given email, ignoring case
    pub fn has_email(&self, email: &str) -> bool {
        self.email.to_lowercase() == email.to_lowercase()
    }

    /// Update user's name
    pub fn rename(&mut self, name: String, now: DateTime<Utc>) {
        self.name = name;
        self.touch(now);
    }

    /// Update user's email
    pub fn change_email(&mut self, email: String, now: DateTime<Utc>) {
        self.email = email;
        self.touch(now);
    }

    /// Bump `updated_at`, never moving it before `created_at`.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now.max(self.created_at);
    }
}
