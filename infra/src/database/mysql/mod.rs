//! MySQL repository implementations
//!
//! Expected schema:
//!
//! ```sql
//! CREATE TABLE users (
//!     id CHAR(36) PRIMARY KEY,
//!     username VARCHAR(255) NOT NULL UNIQUE,
//!     password_hash VARCHAR(255) NOT NULL,
//!     created_at TIMESTAMP NOT NULL
//! );
//!
//! CREATE TABLE sessions (
//!     token_id VARCHAR(36) NOT NULL,
//!     device_id VARCHAR(64) NOT NULL,
//!     user_id CHAR(36) NOT NULL,
//!     revoked BOOLEAN NOT NULL DEFAULT FALSE,
//!     created_at TIMESTAMP NOT NULL,
//!     expires_at TIMESTAMP NOT NULL,
//!     PRIMARY KEY (token_id, device_id),
//!     FOREIGN KEY (user_id) REFERENCES users (id) ON DELETE CASCADE
//! );
//! ```

pub mod session_store_impl;
pub mod user_repository_impl;

pub use session_store_impl::MySqlSessionStore;
pub use user_repository_impl::MySqlUserRepository;
