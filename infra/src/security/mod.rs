//! Security implementations for the core's collaborator traits.

pub mod bcrypt_verifier;

pub use bcrypt_verifier::BcryptPasswordVerifier;
