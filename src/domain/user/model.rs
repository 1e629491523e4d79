use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Admin,
    Standard,
}

impl Default for UserRole {
    fn default() -> Self {
        Self::Standard
    }
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Standard => "Standard",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known role.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for UserRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(UserRole::Admin),
            "standard" => Ok(UserRole::Standard),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

/// User model
///
/// `user_id == 0` marks a user that has not been persisted yet; the store
/// assigns the identifier on insert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub user_id: i32,
    pub full_name: String,
    pub email: String,
    pub role: UserRole,
    /// bcrypt hash, never the plain credential
    pub password: String,
    pub is_default_password: bool,
    pub created_at: DateTime<Utc>,
}
