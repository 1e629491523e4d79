//! # Accounts Service
//!
//! User-data access layer: a repository contract over the `User` entity,
//! its SeaORM and in-memory adapters, and the DTOs that shape user
//! requests and responses.
//!
//! ## Architecture
//!
//! - **domain**: User entity, role, DTOs and the repository trait
//! - **application**: `UserService`, the caller-side orchestration
//! - **infrastructure**: database connection, migrations, repositories, hashing
//! - **support**: error types and tracing setup

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod support;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::database::repositories::SeaOrmUserRepository;
pub use infrastructure::{init_database, run_migrations, DatabaseConfig, InMemoryUserRepository};
