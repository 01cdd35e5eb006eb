//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{AuthError, ErrorOutcome, TokenError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Duplicate key: {key}")]
    DuplicateKey { key: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    /// How the failure should surface to the caller
    ///
    /// Reuse detection, unknown principals, and every codec-level rejection
    /// are unauthorized outcomes; a missing refresh token is a bad request.
    pub fn outcome(&self) -> ErrorOutcome {
        match self {
            DomainError::Auth(e) => e.outcome(),
            DomainError::Token(e) => e.outcome(),
            DomainError::DuplicateKey { .. } => ErrorOutcome::Conflict,
            DomainError::Internal { .. } => ErrorOutcome::Internal,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
