//! Error type definitions for authentication and token management
//!
//! Error messages here are developer-facing; the presentation layer maps
//! error codes from the `ErrorResponse` conversions to client messages.

use sg_shared::errors::{error_codes, ErrorResponse};
use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Incorrect username or password")]
    InvalidCredentials,

    #[error("User not found")]
    UserNotFound,

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Refresh token is required")]
    MissingToken,
}

/// Token-related errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Malformed token")]
    Malformed,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Refresh token has been revoked")]
    ReuseDetected,

    #[error("Token generation failed")]
    GenerationFailed,
}

/// Caller-facing classification of a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorOutcome {
    /// Credential rejected; the caller must re-authenticate
    Unauthorized,
    /// The request itself was malformed or incomplete
    BadRequest,
    /// The request conflicts with existing state
    Conflict,
    /// Unexpected failure in the service or its collaborators
    Internal,
}

impl AuthError {
    pub fn outcome(&self) -> ErrorOutcome {
        match self {
            AuthError::InvalidCredentials | AuthError::UserNotFound => ErrorOutcome::Unauthorized,
            AuthError::UserAlreadyExists | AuthError::MissingToken => ErrorOutcome::BadRequest,
        }
    }
}

impl TokenError {
    pub fn outcome(&self) -> ErrorOutcome {
        match self {
            TokenError::GenerationFailed => ErrorOutcome::Internal,
            _ => ErrorOutcome::Unauthorized,
        }
    }
}

/// Convert AuthError to ErrorResponse
impl From<AuthError> for ErrorResponse {
    fn from(err: AuthError) -> Self {
        let error_code = match &err {
            AuthError::InvalidCredentials => error_codes::INVALID_CREDENTIALS,
            AuthError::UserNotFound => error_codes::USER_NOT_FOUND,
            AuthError::UserAlreadyExists => error_codes::USER_ALREADY_EXISTS,
            AuthError::MissingToken => error_codes::MISSING_TOKEN,
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert TokenError to ErrorResponse
impl From<TokenError> for ErrorResponse {
    fn from(err: TokenError) -> Self {
        let error_code = match &err {
            TokenError::Expired => error_codes::TOKEN_EXPIRED,
            TokenError::InvalidSignature => error_codes::INVALID_SIGNATURE,
            TokenError::Malformed => error_codes::TOKEN_MALFORMED,
            TokenError::InvalidToken => error_codes::TOKEN_INVALID,
            TokenError::ReuseDetected => error_codes::TOKEN_REUSE_DETECTED,
            TokenError::GenerationFailed => error_codes::TOKEN_GENERATION_FAILED,
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert DomainError to ErrorResponse
impl From<super::DomainError> for ErrorResponse {
    fn from(err: super::DomainError) -> Self {
        match err {
            super::DomainError::Auth(e) => e.into(),
            super::DomainError::Token(e) => e.into(),
            super::DomainError::DuplicateKey { ref key } => {
                ErrorResponse::new(error_codes::DUPLICATE_KEY, err.to_string())
                    .add_detail("key", key)
            }
            super::DomainError::Internal { .. } => {
                ErrorResponse::new(error_codes::INTERNAL_ERROR, err.to_string())
            }
        }
    }
}
