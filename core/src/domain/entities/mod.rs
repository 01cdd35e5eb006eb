//! Domain entities representing core business objects.

pub mod session;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use session::SessionRecord;
pub use token::{
    Claims, TokenKind, ACCESS_TOKEN_EXPIRY_MINUTES, JWT_ISSUER, REFRESH_TOKEN_EXPIRY_DAYS,
};
pub use user::User;
