//! In-memory user repository

use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use sea_orm::DbErr;

use crate::domain::{RepoResult, User, UserRepositoryInterface, UserRole};

/// In-memory user store for development and testing
///
/// Behaves like the SQL adapter: ids are assigned from 1 upward, email is
/// not unique, and updating an unknown id fails with
/// `DbErr::RecordNotUpdated`.
pub struct InMemoryUserRepository {
    users: DashMap<i32, User>,
    user_counter: AtomicI32,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            user_counter: AtomicI32::new(1),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepositoryInterface for InMemoryUserRepository {
    async fn get_user_details_by_id(&self, user_id: i32) -> RepoResult<Option<User>> {
        Ok(self.users.get(&user_id).map(|u| u.value().clone()))
    }

    async fn find_user_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        // Lowest id first, the order rows were inserted in.
        Ok(self
            .users
            .iter()
            .filter(|u| u.email == email)
            .min_by_key(|u| u.user_id)
            .map(|u| u.value().clone()))
    }

    async fn is_user_exists_with_email(&self, email: &str) -> RepoResult<bool> {
        Ok(self.users.iter().any(|u| u.email == email))
    }

    async fn create(&self, mut user: User) -> RepoResult<User> {
        if user.user_id == 0 {
            user.user_id = self.user_counter.fetch_add(1, Ordering::SeqCst);
        } else if let Some(next) = user.user_id.checked_add(1) {
            self.user_counter.fetch_max(next, Ordering::SeqCst);
        }

        match self.users.entry(user.user_id) {
            Entry::Occupied(_) => Err(DbErr::RecordNotInserted),
            Entry::Vacant(slot) => {
                slot.insert(user.clone());
                Ok(user)
            }
        }
    }

    async fn update(&self, user: User) -> RepoResult<()> {
        match self.users.get_mut(&user.user_id) {
            Some(mut existing) => {
                *existing = user;
                Ok(())
            }
            None => Err(DbErr::RecordNotUpdated),
        }
    }

    async fn get_all_users(&self) -> RepoResult<Vec<User>> {
        Ok(self.users.iter().map(|u| u.value().clone()).collect())
    }

    async fn delete(&self, user_id: i32) -> RepoResult<bool> {
        Ok(self.users.remove(&user_id).is_some())
    }

    async fn get_user_role(&self, user_id: i32) -> RepoResult<Option<UserRole>> {
        Ok(self.users.get(&user_id).map(|u| u.role))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn user(email: &str) -> User {
        User {
            user_id: 0,
            full_name: "Test".to_string(),
            email: email.to_string(),
            role: UserRole::Standard,
            password: "hash".to_string(),
            is_default_password: false,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn assigns_sequential_ids() {
        let repo = InMemoryUserRepository::new();
        let a = repo.create(user("a@x.com")).await.unwrap();
        let b = repo.create(user("b@x.com")).await.unwrap();
        assert_eq!((a.user_id, b.user_id), (1, 2));
    }

    #[tokio::test]
    async fn explicit_id_advances_counter() {
        let repo = InMemoryUserRepository::new();
        repo.create(User { user_id: 10, ..user("a@x.com") }).await.unwrap();
        let next = repo.create(user("b@x.com")).await.unwrap();
        assert_eq!(next.user_id, 11);

        let clash = repo.create(User { user_id: 10, ..user("c@x.com") }).await;
        assert!(matches!(clash, Err(DbErr::RecordNotInserted)));
    }

    #[tokio::test]
    async fn max_explicit_id_is_accepted() {
        let repo = InMemoryUserRepository::new();
        let top = repo
            .create(User { user_id: i32::MAX, ..user("max@x.com") })
            .await
            .unwrap();
        assert_eq!(top.user_id, i32::MAX);

        let clash = repo.create(User { user_id: i32::MAX, ..user("again@x.com") }).await;
        assert!(matches!(clash, Err(DbErr::RecordNotInserted)));
        assert_eq!(repo.get_all_users().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn assigned_id_never_replaces_existing_row() {
        let repo = InMemoryUserRepository::new();
        repo.user_counter.store(3, Ordering::SeqCst);
        repo.users.insert(3, User { user_id: 3, ..user("held@x.com") });

        let clash = repo.create(user("auto@x.com")).await;
        assert!(matches!(clash, Err(DbErr::RecordNotInserted)));
        let held = repo.get_user_details_by_id(3).await.unwrap().unwrap();
        assert_eq!(held.email, "held@x.com");
    }

    #[tokio::test]
    async fn first_email_match_is_oldest_row() {
        let repo = InMemoryUserRepository::new();
        let first = repo.create(user("dup@x.com")).await.unwrap();
        repo.create(user("dup@x.com")).await.unwrap();
        let found = repo.find_user_by_email("dup@x.com").await.unwrap();
        assert_eq!(found.map(|u| u.user_id), Some(first.user_id));
    }

    #[tokio::test]
    async fn update_unknown_id_fails() {
        let repo = InMemoryUserRepository::new();
        let err = repo.update(User { user_id: 5, ..user("a@x.com") }).await;
        assert!(matches!(err, Err(DbErr::RecordNotUpdated)));
    }

    #[tokio::test]
    async fn delete_reports_presence() {
        let repo = InMemoryUserRepository::new();
        let u = repo.create(user("a@x.com")).await.unwrap();
        assert!(repo.delete(u.user_id).await.unwrap());
        assert!(!repo.delete(u.user_id).await.unwrap());
        assert!(repo.get_all_users().await.unwrap().is_empty());
    }
}
