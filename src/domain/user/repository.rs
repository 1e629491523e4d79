use async_trait::async_trait;

use super::{User, UserRole};
use crate::domain::RepoResult;

/// Persistence contract for [`User`] records.
///
/// Lookups that find nothing return `None` (or `false`); only store
/// failures come back as `Err`, exactly as the store reported them.
#[async_trait]
pub trait UserRepositoryInterface: Send + Sync {
    async fn get_user_details_by_id(&self, user_id: i32) -> RepoResult<Option<User>>;

    /// First user whose email equals `email`.
    async fn find_user_by_email(&self, email: &str) -> RepoResult<Option<User>>;
    async fn is_user_exists_with_email(&self, email: &str) -> RepoResult<bool>;

    /// Insert `user` and return it with the identifier the store assigned.
    /// Email uniqueness is up to the caller.
    async fn create(&self, user: User) -> RepoResult<User>;

    /// Replace the stored record with the same `user_id` wholesale.
    async fn update(&self, user: User) -> RepoResult<()>;

    async fn get_all_users(&self) -> RepoResult<Vec<User>>;

    /// Returns `false` when no user had this id.
    async fn delete(&self, user_id: i32) -> RepoResult<bool>;

    async fn get_user_role(&self, user_id: i32) -> RepoResult<Option<UserRole>>;

    /// Alias of [`get_user_details_by_id`](Self::get_user_details_by_id).
    async fn find_user_by_id(&self, user_id: i32) -> RepoResult<Option<User>> {
        self.get_user_details_by_id(user_id).await
    }
}
