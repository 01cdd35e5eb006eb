//! Business services containing domain logic and use cases.

pub mod auth;
pub mod session;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, AuthenticatedPrincipal, Credential, PasswordVerifier};
pub use session::{SessionConfig, SessionService, Sweeper, SweeperConfig};
pub use token::TokenCodec;
