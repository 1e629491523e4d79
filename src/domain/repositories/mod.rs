//! Repository result types for the domain layer
//!
//! Repositories hand store failures back untouched, so their error type
//! is SeaORM's own `DbErr`. Absent records are `Ok(None)` / `Ok(false)`.

/// Result type for repository operations
pub type RepoResult<T> = Result<T, sea_orm::DbErr>;
