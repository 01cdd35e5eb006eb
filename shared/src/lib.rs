//! Shared utilities and common types for the SessionGuard server
//!
//! This crate provides common functionality used across server modules:
//! - Configuration types loaded from the environment
//! - Error response structures shared with the presentation layer

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{AppConfig, DatabaseConfig, Environment, SweeperSettings, TokenConfig};
pub use errors::{error_codes, ErrorResponse};
