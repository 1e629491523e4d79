//! Identity module — user management
//!
//! Contains the `UserService` which orchestrates all user-related
//! use-cases: creation, profile updates, password changes, seeding.

pub mod service;

pub use service::{CreatedUser, UserService};
