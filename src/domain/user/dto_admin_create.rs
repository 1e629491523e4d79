use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validate_role;

/// Admin request to create a user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AdminCreateUserDto {
    #[validate(length(min = 1, max = 40))]
    pub full_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(custom(function = "validate_role"))]
    pub role: String,
    /// When absent a default password is generated.
    #[serde(default)]
    #[validate(length(min = 8, max = 128))]
    pub password: Option<String>,
}
