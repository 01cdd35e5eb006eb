//! Bcrypt-backed password hashing.

use sg_core::errors::{DomainError, DomainResult};
use sg_core::services::PasswordVerifier;

/// Password verifier backed by bcrypt
pub struct BcryptPasswordVerifier {
    /// Bcrypt cost factor
    cost: u32,
}

impl BcryptPasswordVerifier {
    /// Create a verifier with an explicit cost factor
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordVerifier {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl PasswordVerifier for BcryptPasswordVerifier {
    fn hash(&self, password: &str) -> DomainResult<String> {
        bcrypt::hash(password, self.cost).map_err(|e| DomainError::Internal {
            message: format!("Failed to hash password: {}", e),
        })
    }

    fn verify(&self, password: &str, password_hash: &str) -> DomainResult<bool> {
        bcrypt::verify(password, password_hash).map_err(|e| DomainError::Internal {
            message: format!("Failed to verify password: {}", e),
        })
    }
}
