use serde::{Deserialize, Serialize};
use validator::Validate;

/// Self-service profile update. Carries no role, so it cannot change one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    #[validate(length(min = 1, max = 40))]
    pub full_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
}
