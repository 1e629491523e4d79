use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::User;

/// Outbound user projection. The credential is never exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponseDto {
    pub user_id: i32,
    pub full_name: String,
    pub email: String,
    pub role: String,
    pub is_default_password: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponseDto {
    fn from(u: User) -> Self {
        Self {
            user_id: u.user_id,
            full_name: u.full_name,
            email: u.email,
            role: u.role.to_string(),
            is_default_password: u.is_default_password,
            created_at: u.created_at,
        }
    }
}
