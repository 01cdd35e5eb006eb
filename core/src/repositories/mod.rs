//! Repository interfaces for persistence, implemented in the infra layer.

pub mod session;
pub mod user;

pub use session::SessionStore;
pub use user::UserRepository;
