//! Session tokens value object returned to the caller.

use serde::{Deserialize, Serialize};

/// Credential pair issued for one (user, device) session
///
/// Returned after login, registration, and every successful rotation.
/// The `device_id` echoes the one presented by the client, or a freshly
/// generated one if the client did not supply any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTokens {
    /// JWT access token (short-lived)
    pub access_token: String,

    /// JWT refresh token (long-lived, one-time-use)
    pub refresh_token: String,

    /// Device identifier the session is scoped to
    pub device_id: String,
}

impl SessionTokens {
    /// Creates a new session tokens value object
    pub fn new(
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        device_id: impl Into<String>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
            device_id: device_id.into(),
        }
    }
}
