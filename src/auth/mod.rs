//! The authentication gate.
//!
//! A single hashed-password equality check standing in for authentication:
//! SHA-256 over the entered password, compared against the digest stored at
//! sign-up. This is a boolean gate for the demo session, not a security
//! boundary.

use crate::catalog::Audience;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// The session-scoped user record created at sign-up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub email: String,
    /// Lower-hex SHA-256 digest of the password.
    pub password_hash: String,
    /// Reader role declared at sign-up; drives recommendations.
    pub role: Audience,
}

impl Account {
    /// Create an account, hashing the password immediately. The plaintext
    /// is never stored.
    pub fn new(email: impl Into<String>, password: &str, role: Audience) -> Self {
        Self {
            email: email.into(),
            password_hash: hash_password(password),
            role,
        }
    }

    /// Check a login attempt against this account.
    pub fn verify(&self, email: &str, password: &str) -> bool {
        self.email == email && verify_password(&self.password_hash, password)
    }
}

/// SHA-256 digest of the password, as 64 lower-hex characters.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Compare a stored digest against a freshly hashed password attempt.
pub fn verify_password(stored_hash: &str, entered: &str) -> bool {
    stored_hash == hash_password(entered)
}
