//! Password hashing collaborator interface

use crate::errors::DomainResult;

/// Hashing and verification of login passwords
///
/// Implementations own the hash format; the core never inspects it beyond
/// passing it back for verification.
pub trait PasswordVerifier: Send + Sync {
    /// Hash a plaintext password for storage
    fn hash(&self, password: &str) -> DomainResult<String>;

    /// Check a plaintext password against a stored hash
    fn verify(&self, password: &str, password_hash: &str) -> DomainResult<bool>;
}
