//! User management service — application-layer orchestration
//!
//! DTO validation, role parsing, email-uniqueness checks and credential
//! handling live here; the repository only moves records.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use validator::Validate;

use crate::config::AdminConfig;
use crate::domain::{
    AdminCreateUserDto, AdminUpdateUserDto, ChangePasswordDto, DomainError, UpdateUserDto, User,
    UserRepositoryInterface, UserResponseDto, UserRole,
};
use crate::infrastructure::crypto::password::{generate_default_password, PasswordHasher};
use crate::support::errors::{ServiceError, ServiceResult};

/// Outcome of creating a user
#[derive(Debug, Clone)]
pub struct CreatedUser {
    pub user: UserResponseDto,
    /// Set only when the password was generated; shown to the admin once.
    pub generated_password: Option<String>,
}

/// User service — orchestrates all identity / user-management use-cases.
///
/// Generic over `R: UserRepositoryInterface` so it stays decoupled from
/// the concrete persistence layer.
pub struct UserService<R: UserRepositoryInterface> {
    repo: Arc<R>,
    hasher: PasswordHasher,
}

impl<R: UserRepositoryInterface> UserService<R> {
    pub fn new(repo: Arc<R>, hasher: PasswordHasher) -> Self {
        Self { repo, hasher }
    }

    // ── Commands (mutations) ────────────────────────────────────

    /// Create a user on behalf of an admin.
    pub async fn create_user(&self, dto: AdminCreateUserDto) -> ServiceResult<CreatedUser> {
        dto.validate()?;
        let role = parse_role(&dto.role)?;

        if self.repo.is_user_exists_with_email(&dto.email).await? {
            return Err(DomainError::Conflict("Email already exists".into()).into());
        }

        let (password, generated_password) = match dto.password {
            Some(p) => (p, None),
            None => {
                let p = generate_default_password();
                (p.clone(), Some(p))
            }
        };

        let user = User {
            user_id: 0,
            full_name: dto.full_name,
            email: dto.email,
            role,
            password: self.hasher.hash(&password)?,
            is_default_password: generated_password.is_some(),
            created_at: Utc::now(),
        };

        let user = self.repo.create(user).await?;
        info!(user_id = user.user_id, role = %user.role, "User created");

        Ok(CreatedUser {
            user: user.into(),
            generated_password,
        })
    }

    /// Admin update: any of name, email, role.
    pub async fn admin_update_user(
        &self,
        user_id: i32,
        dto: AdminUpdateUserDto,
    ) -> ServiceResult<UserResponseDto> {
        dto.validate()?;
        let role = dto.role.as_deref().map(parse_role).transpose()?;

        let mut user = self.load(user_id).await?;
        self.apply_profile(&mut user, dto.full_name, dto.email).await?;
        if let Some(role) = role {
            user.role = role;
        }

        self.repo.update(user.clone()).await?;
        info!(user_id, "User updated by admin");
        Ok(user.into())
    }

    /// Self-service update: name and email only.
    pub async fn update_user(
        &self,
        user_id: i32,
        dto: UpdateUserDto,
    ) -> ServiceResult<UserResponseDto> {
        dto.validate()?;

        let mut user = self.load(user_id).await?;
        self.apply_profile(&mut user, dto.full_name, dto.email).await?;

        self.repo.update(user.clone()).await?;
        info!(user_id, "User updated");
        Ok(user.into())
    }

    /// Change a user's password. Verifies the current password first and
    /// clears the default-password flag.
    pub async fn change_password(&self, user_id: i32, dto: ChangePasswordDto) -> ServiceResult<()> {
        dto.validate()?;

        let mut user = self.load(user_id).await?;
        if !self.hasher.verify(&dto.current_password, &user.password)? {
            return Err(DomainError::Unauthorized("Invalid current password".into()).into());
        }

        user.password = self.hasher.hash(&dto.new_password)?;
        user.is_default_password = false;
        self.repo.update(user).await?;

        info!(user_id, "Password changed");
        Ok(())
    }

    /// Delete a user by ID. `false` when there was no such user.
    pub async fn delete_user(&self, user_id: i32) -> ServiceResult<bool> {
        let deleted = self.repo.delete(user_id).await?;
        if deleted {
            info!(user_id, "User deleted");
        }
        Ok(deleted)
    }

    /// Seed the configured administrator unless a user with that email
    /// already exists. The configured fields must pass the same rules as
    /// an admin-created user.
    pub async fn ensure_default_admin(
        &self,
        admin: &AdminConfig,
    ) -> ServiceResult<Option<CreatedUser>> {
        let dto = AdminCreateUserDto {
            full_name: admin.full_name.clone(),
            email: admin.email.clone(),
            role: UserRole::Admin.to_string(),
            password: Some(admin.password.clone()),
        };
        dto.validate()?;

        if self.repo.is_user_exists_with_email(&dto.email).await? {
            return Ok(None);
        }

        info!("Creating default admin user...");
        let user = User {
            user_id: 0,
            password: self.hasher.hash(&admin.password)?,
            full_name: dto.full_name,
            email: dto.email,
            role: UserRole::Admin,
            is_default_password: true,
            created_at: Utc::now(),
        };
        let user = self.repo.create(user).await?;
        info!(user_id = user.user_id, email = %user.email, "Default admin created");

        Ok(Some(CreatedUser {
            user: user.into(),
            generated_password: None,
        }))
    }

    // ── Queries ─────────────────────────────────────────────────

    pub async fn get_user(&self, user_id: i32) -> ServiceResult<Option<UserResponseDto>> {
        Ok(self
            .repo
            .get_user_details_by_id(user_id)
            .await?
            .map(UserResponseDto::from))
    }

    pub async fn get_user_by_email(&self, email: &str) -> ServiceResult<Option<UserResponseDto>> {
        Ok(self
            .repo
            .find_user_by_email(email)
            .await?
            .map(UserResponseDto::from))
    }

    pub async fn list_users(&self) -> ServiceResult<Vec<UserResponseDto>> {
        let users = self.repo.get_all_users().await?;
        Ok(users.into_iter().map(UserResponseDto::from).collect())
    }

    pub async fn get_user_role(&self, user_id: i32) -> ServiceResult<Option<UserRole>> {
        Ok(self.repo.get_user_role(user_id).await?)
    }

    // ── Helpers ─────────────────────────────────────────────────

    async fn load(&self, user_id: i32) -> ServiceResult<User> {
        self.repo
            .find_user_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found(user_id))
    }

    /// Merge optional profile fields into `user`. A changed email must not
    /// belong to anyone else.
    async fn apply_profile(
        &self,
        user: &mut User,
        full_name: Option<String>,
        email: Option<String>,
    ) -> ServiceResult<()> {
        if let Some(email) = email {
            if email != user.email {
                if self.repo.is_user_exists_with_email(&email).await? {
                    return Err(DomainError::Conflict("Email already exists".into()).into());
                }
                user.email = email;
            }
        }
        if let Some(full_name) = full_name {
            user.full_name = full_name;
        }
        Ok(())
    }
}

fn parse_role(s: &str) -> ServiceResult<UserRole> {
    s.parse::<UserRole>()
        .map_err(|e| DomainError::Validation(e.to_string()).into())
}
