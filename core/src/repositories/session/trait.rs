//! Session store trait defining the interface for refresh-session persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::session::SessionRecord;
use crate::errors::DomainResult;

/// Repository trait for SessionRecord persistence operations
///
/// All operations are keyed by `token_id`, optionally scoped by `device_id`.
/// Implementations must provide `revoke_if_active` as a single atomic
/// conditional update (compare-and-swap on the `revoked` flag), never as a
/// separate read followed by a write: two concurrent rotations presenting the
/// same token must not both observe an unrevoked record.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persist a new session record
    ///
    /// # Returns
    /// * `Ok(SessionRecord)` - The saved record
    /// * `Err(DomainError::DuplicateKey)` - A record with the same
    ///   (token_id, device_id) pair already exists
    async fn insert(&self, record: SessionRecord) -> DomainResult<SessionRecord>;

    /// Find a session record by its refresh token identifier
    ///
    /// # Returns
    /// * `Ok(Some(SessionRecord))` - Record found
    /// * `Ok(None)` - No record exists for the given token id
    async fn find_by_token_id(&self, token_id: &str) -> DomainResult<Option<SessionRecord>>;

    /// Atomically set `revoked = true` if the record is currently unrevoked
    ///
    /// This is the one-time-use primitive for rotation: exactly one caller
    /// can ever observe `true` for a given token id.
    ///
    /// # Returns
    /// * `Ok(true)` - This call performed the revocation
    /// * `Ok(false)` - No record exists, or it was already revoked
    async fn revoke_if_active(&self, token_id: &str) -> DomainResult<bool>;

    /// Delete every session record scoped to a device
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of records deleted (zero is a valid no-op)
    async fn delete_all_for_device(&self, device_id: &str) -> DomainResult<usize>;

    /// Delete session records whose expiry precedes the given cutoff
    ///
    /// Called by the sweeper for storage hygiene; expiry enforcement itself
    /// happens at the token codec level.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of records deleted
    async fn delete_expired_before(&self, cutoff: DateTime<Utc>) -> DomainResult<usize>;
}
