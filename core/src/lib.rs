//! # SessionGuard Core
//!
//! Core business logic and domain layer for the SessionGuard backend.
//! This crate contains domain entities, the session lifecycle services,
//! repository interfaces, and error types. Persistence implementations
//! live in the infrastructure layer.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
