//! Session record entity tracking one issued refresh token.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Persisted state for one issued refresh token
///
/// A record is created when a refresh token is issued and revoked exactly
/// once, either by the rotation that consumes the token or by a device-wide
/// revocation. The `revoked` flag never returns to `false`. Expired records
/// are removed by the sweeper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Refresh token identifier (the token's `jti` claim)
    pub token_id: String,

    /// User this session belongs to
    pub user_id: Uuid,

    /// Client installation this session is scoped to
    pub device_id: String,

    /// Whether the refresh token has been consumed or revoked
    pub revoked: bool,

    /// Timestamp when the record was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the refresh token expires
    pub expires_at: DateTime<Utc>,
}

impl SessionRecord {
    /// Creates a new active session record
    ///
    /// # Arguments
    ///
    /// * `token_id` - The refresh token's identifier
    /// * `user_id` - The owning user's UUID
    /// * `device_id` - The device this session is scoped to
    /// * `ttl` - Time until the refresh token expires
    pub fn new(
        token_id: impl Into<String>,
        user_id: Uuid,
        device_id: impl Into<String>,
        ttl: Duration,
    ) -> Self {
        let now = Utc::now();

        Self {
            token_id: token_id.into(),
            user_id,
            device_id: device_id.into(),
            revoked: false,
            created_at: now,
            expires_at: now + ttl,
        }
    }

    /// Checks if the session record has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Checks if the record is active (not revoked, not expired)
    pub fn is_active(&self) -> bool {
        !self.revoked && !self.is_expired()
    }

    /// Marks the refresh token as consumed. One-way transition.
    pub fn revoke(&mut self) {
        self.revoked = true;
    }
}
