use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, Set,
};

use crate::domain::{RepoResult, User, UserRepositoryInterface, UserRole};
use crate::infrastructure::database::entities::user;

/// SeaORM-backed user repository
///
/// Every method is a single statement against `db`; errors are the
/// driver's own `DbErr`.
pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get database connection reference
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn entity_role_to_domain(role: user::UserRole) -> UserRole {
    match role {
        user::UserRole::Admin => UserRole::Admin,
        user::UserRole::Standard => UserRole::Standard,
    }
}

fn domain_role_to_entity(role: UserRole) -> user::UserRole {
    match role {
        UserRole::Admin => user::UserRole::Admin,
        UserRole::Standard => user::UserRole::Standard,
    }
}

fn user_model_to_domain(model: user::Model) -> User {
    User {
        user_id: model.user_id,
        full_name: model.full_name,
        email: model.email,
        role: entity_role_to_domain(model.role),
        password: model.password,
        is_default_password: model.is_default_password,
        created_at: model.created_at,
    }
}

fn domain_to_active_model(u: User) -> user::ActiveModel {
    user::ActiveModel {
        user_id: Set(u.user_id),
        full_name: Set(u.full_name),
        email: Set(u.email),
        role: Set(domain_role_to_entity(u.role)),
        password: Set(u.password),
        is_default_password: Set(u.is_default_password),
        created_at: Set(u.created_at),
    }
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl UserRepositoryInterface for SeaOrmUserRepository {
    async fn get_user_details_by_id(&self, user_id: i32) -> RepoResult<Option<User>> {
        let model = user::Entity::find_by_id(user_id).one(&self.db).await?;
        Ok(model.map(user_model_to_domain))
    }

    async fn find_user_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        Ok(model.map(user_model_to_domain))
    }

    async fn is_user_exists_with_email(&self, email: &str) -> RepoResult<bool> {
        let count = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }

    async fn create(&self, user: User) -> RepoResult<User> {
        let assign_id = user.user_id == 0;
        let mut active = domain_to_active_model(user);
        if assign_id {
            active.user_id = NotSet;
        }

        let model = active.insert(&self.db).await?;
        Ok(user_model_to_domain(model))
    }

    async fn update(&self, user: User) -> RepoResult<()> {
        domain_to_active_model(user).update(&self.db).await?;
        Ok(())
    }

    async fn get_all_users(&self) -> RepoResult<Vec<User>> {
        let models = user::Entity::find().all(&self.db).await?;
        Ok(models.into_iter().map(user_model_to_domain).collect())
    }

    async fn delete(&self, user_id: i32) -> RepoResult<bool> {
        let result = user::Entity::delete_by_id(user_id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }

    async fn get_user_role(&self, user_id: i32) -> RepoResult<Option<UserRole>> {
        let model = user::Entity::find_by_id(user_id).one(&self.db).await?;
        Ok(model.map(|m| entity_role_to_domain(m.role)))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use sea_orm::DbErr;

    use super::*;
    use crate::infrastructure::database::{init_database, run_migrations, DatabaseConfig};

    async fn repo() -> SeaOrmUserRepository {
        let db = init_database(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&db).await.unwrap();
        SeaOrmUserRepository::new(db)
    }

    fn new_user(full_name: &str, email: &str, role: UserRole) -> User {
        User {
            user_id: 0,
            full_name: full_name.to_string(),
            email: email.to_string(),
            role,
            password: "$2b$04$not-a-real-hash".to_string(),
            is_default_password: false,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_both_accessors_agree() {
        let repo = repo().await;
        let created = repo
            .create(new_user("Jane Doe", "jane@test.com", UserRole::Standard))
            .await
            .unwrap();
        assert!(created.user_id > 0);

        let direct = user::Entity::find_by_id(created.user_id)
            .one(repo.connection())
            .await
            .unwrap()
            .map(user_model_to_domain);

        let details = repo.get_user_details_by_id(created.user_id).await.unwrap();
        let found = repo.find_user_by_id(created.user_id).await.unwrap();

        assert_eq!(details, Some(created.clone()));
        assert_eq!(details, found);
        assert_eq!(details, direct);
    }

    #[tokio::test]
    async fn missing_id_is_absent_not_an_error() {
        let repo = repo().await;
        assert_eq!(repo.get_user_details_by_id(42).await.unwrap(), None);
        assert_eq!(repo.find_user_by_id(42).await.unwrap(), None);
        assert_eq!(repo.get_user_role(42).await.unwrap(), None);
        assert!(!repo.delete(42).await.unwrap());
    }

    #[tokio::test]
    async fn email_lookups_after_create() {
        let repo = repo().await;
        assert!(!repo.is_user_exists_with_email("a@x.com").await.unwrap());
        assert_eq!(repo.find_user_by_email("a@x.com").await.unwrap(), None);

        let created = repo
            .create(new_user("A", "a@x.com", UserRole::Admin))
            .await
            .unwrap();

        assert!(repo.is_user_exists_with_email("a@x.com").await.unwrap());
        assert_eq!(repo.find_user_by_email("a@x.com").await.unwrap(), Some(created));
        assert!(!repo.is_user_exists_with_email("A@X.COM.invalid").await.unwrap());
    }

    #[tokio::test]
    async fn duplicate_emails_are_not_rejected_here() {
        let repo = repo().await;
        repo.create(new_user("One", "dup@x.com", UserRole::Standard))
            .await
            .unwrap();
        repo.create(new_user("Two", "dup@x.com", UserRole::Standard))
            .await
            .unwrap();

        let first = repo.find_user_by_email("dup@x.com").await.unwrap().unwrap();
        assert_eq!(first.email, "dup@x.com");
        assert_eq!(repo.get_all_users().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn update_replaces_every_field() {
        let repo = repo().await;
        let created = repo
            .create(new_user("Before", "before@x.com", UserRole::Standard))
            .await
            .unwrap();

        let replaced = User {
            user_id: created.user_id,
            full_name: "After".to_string(),
            email: "after@x.com".to_string(),
            role: UserRole::Admin,
            password: "$2b$04$another-hash".to_string(),
            is_default_password: true,
            created_at: Utc.with_ymd_and_hms(2023, 6, 30, 8, 15, 0).unwrap(),
        };
        repo.update(replaced.clone()).await.unwrap();

        let fetched = repo.get_user_details_by_id(created.user_id).await.unwrap();
        assert_eq!(fetched, Some(replaced));
        assert!(!repo.is_user_exists_with_email("before@x.com").await.unwrap());
    }

    #[tokio::test]
    async fn update_of_missing_row_surfaces_store_error() {
        let repo = repo().await;
        let ghost = User {
            user_id: 999,
            ..new_user("Ghost", "ghost@x.com", UserRole::Standard)
        };
        let err = repo.update(ghost).await.unwrap_err();
        assert!(matches!(err, DbErr::RecordNotUpdated));
    }

    #[tokio::test]
    async fn delete_removes_row() {
        let repo = repo().await;
        let created = repo
            .create(new_user("Gone", "gone@x.com", UserRole::Standard))
            .await
            .unwrap();

        assert!(repo.delete(created.user_id).await.unwrap());
        assert_eq!(repo.get_user_details_by_id(created.user_id).await.unwrap(), None);
        assert!(!repo.delete(created.user_id).await.unwrap());
    }

    #[tokio::test]
    async fn get_all_users_tracks_creates_minus_deletes() {
        let repo = repo().await;
        let mut ids = Vec::new();
        for i in 0..5 {
            let u = repo
                .create(new_user(&format!("U{i}"), &format!("u{i}@x.com"), UserRole::Standard))
                .await
                .unwrap();
            ids.push(u.user_id);
        }
        assert!(repo.delete(ids[1]).await.unwrap());
        assert!(repo.delete(ids[3]).await.unwrap());

        let mut remaining: Vec<i32> = repo
            .get_all_users()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.user_id)
            .collect();
        remaining.sort_unstable();
        assert_eq!(remaining, vec![ids[0], ids[2], ids[4]]);
    }

    #[tokio::test]
    async fn jane_doe_lifecycle() {
        let repo = repo().await;
        let jane = repo
            .create(new_user("Jane Doe", "jane@test.com", UserRole::Standard))
            .await
            .unwrap();

        assert!(repo.is_user_exists_with_email("jane@test.com").await.unwrap());
        assert_eq!(
            repo.get_user_role(jane.user_id).await.unwrap(),
            Some(UserRole::Standard)
        );
        assert!(repo.delete(jane.user_id).await.unwrap());
        assert_eq!(repo.get_user_role(jane.user_id).await.unwrap(), None);
    }
}
