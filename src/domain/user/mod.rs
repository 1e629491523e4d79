//! User aggregate
//!
//! Contains the User entity, DTOs, and repository interface.

pub mod model;
pub mod repository;

mod dto_admin_create;
mod dto_admin_update;
mod dto_change_password;
mod dto_response;
mod dto_update;

use validator::ValidationError;

// Re-export model types
pub use model::{UnknownRole, User, UserRole};

// Re-export DTOs
pub use dto_admin_create::AdminCreateUserDto;
pub use dto_admin_update::AdminUpdateUserDto;
pub use dto_change_password::ChangePasswordDto;
pub use dto_response::UserResponseDto;
pub use dto_update::UpdateUserDto;

// Re-export repository trait
pub use repository::UserRepositoryInterface;

pub(crate) fn validate_role(role: &str) -> Result<(), ValidationError> {
    role.parse::<UserRole>().map(|_| ()).map_err(|_| {
        let mut err = ValidationError::new("role");
        err.message = Some("must be one of: Admin, Standard".into());
        err
    })
}
