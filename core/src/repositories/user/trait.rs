//! User repository trait defining the interface for principal lookup.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainResult;

/// Repository trait for User entity persistence operations
///
/// The session layer only needs existence-distinguishing lookups: both
/// finders return `Ok(None)` for an unknown principal rather than an error,
/// so callers decide how absence surfaces.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The saved user
    /// * `Err(DomainError::DuplicateKey)` - The username is already taken
    async fn insert(&self, user: User) -> DomainResult<User>;

    /// Find a user by id
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>>;

    /// Find a user by username
    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>>;
}
