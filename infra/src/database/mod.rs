//! Database module - MySQL implementations using SQLx

pub mod connection;
pub mod mysql;

// Re-export commonly used types
pub use connection::create_pool;
pub use mysql::{MySqlSessionStore, MySqlUserRepository};
