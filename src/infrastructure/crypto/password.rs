//! Password hashing utilities

use bcrypt::{hash, verify, DEFAULT_COST};
use rand::distributions::Alphanumeric;
use rand::Rng;

/// Length of generated default passwords
pub const DEFAULT_PASSWORD_LEN: usize = 12;

/// bcrypt hasher with a fixed work factor
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a password using bcrypt
    pub fn hash(&self, password: &str) -> Result<String, bcrypt::BcryptError> {
        hash(password, self.cost)
    }

    /// Verify a password against a hash
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
        verify(password, hash)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}

/// Random alphanumeric password handed out when an admin creates a user
/// without one.
pub fn generate_default_password() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(DEFAULT_PASSWORD_LEN)
        .map(char::from)
        .collect()
}
