pub mod identity;

pub use identity::{CreatedUser, UserService};
