//! # Infrastructure Layer
//!
//! Concrete implementations of the SessionGuard core interfaces:
//! - **Database**: MySQL implementations of the session store and user
//!   repository using SQLx
//! - **Security**: bcrypt password verifier

pub mod database;
pub mod security;

// Re-export core error types for convenience
pub use sg_core::errors::*;
