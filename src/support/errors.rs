use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Already exists: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

/// Everything a user-service call can fail with.
///
/// Store failures are carried as-is in [`ServiceError::Database`].
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Invalid input: {0}")]
    Invalid(#[from] validator::ValidationErrors),

    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    #[error("Crypto error: {0}")]
    Crypto(#[from] bcrypt::BcryptError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    pub fn not_found(user_id: i32) -> Self {
        DomainError::NotFound {
            entity: "User",
            field: "user_id",
            value: user_id.to_string(),
        }
        .into()
    }
}
