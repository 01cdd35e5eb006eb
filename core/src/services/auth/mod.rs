//! Authentication module
//!
//! Login, registration, and request authentication on top of the session
//! service. Password hashing itself is a collaborator behind the
//! `PasswordVerifier` trait; the bcrypt implementation lives in the
//! infrastructure layer.

mod password;
mod service;
mod strategy;

#[cfg(test)]
mod tests;

pub use password::PasswordVerifier;
pub use service::AuthService;
pub use strategy::{AuthenticatedPrincipal, Credential};
