pub mod entities;
pub mod migrator;
pub mod repositories;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use migrator::Migrator;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://./accounts.db?mode=rwc";

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database URL (e.g., "sqlite://./accounts.db?mode=rwc")
    pub url: String,
    /// Pool size cap; `None` keeps the driver default
    pub max_connections: Option<u32>,
}

impl DatabaseConfig {
    /// Private in-memory SQLite database. A single pooled connection keeps
    /// every query on the same database.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: Some(1),
        }
    }
}

/// Initialize database connection
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection, sea_orm::DbErr> {
    info!("Connecting to database: {}", config.url);
    let mut options = ConnectOptions::new(config.url.clone());
    if let Some(max) = config.max_connections {
        options.max_connections(max).min_connections(1);
    }
    options.sqlx_logging(false);
    let db = Database::connect(options).await?;
    info!("Database connected successfully");
    Ok(db)
}

/// Apply all pending schema migrations.
pub async fn run_migrations(db: &DatabaseConnection) -> Result<(), sea_orm::DbErr> {
    info!("Running database migrations...");
    Migrator::up(db, None).await?;
    info!("Migrations completed");
    Ok(())
}
