use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validate_role;

/// Admin request to update a user. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AdminUpdateUserDto {
    #[validate(length(min = 1, max = 40))]
    pub full_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(custom(function = "validate_role"))]
    pub role: Option<String>,
}
