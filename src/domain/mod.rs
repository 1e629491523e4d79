pub mod repositories;
pub mod user;

// Re-export commonly used types
pub use repositories::RepoResult;
pub use user::{
    AdminCreateUserDto, AdminUpdateUserDto, ChangePasswordDto, UpdateUserDto, User,
    UserRepositoryInterface, UserResponseDto, UserRole,
};

// Re-export DomainError from support for convenience
pub use crate::support::errors::DomainError;
