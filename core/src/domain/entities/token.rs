//! Token claims for JWT-based session credentials.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Access token expiration time (15 minutes)
pub const ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 15;

/// Refresh token expiration time (7 days)
pub const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// JWT issuer
pub const JWT_ISSUER: &str = "session-guard";

/// The kind of credential a token represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Short-lived credential presented on every API call
    Access,
    /// Long-lived, one-time-use credential that mints new pairs
    Refresh,
}

/// Claims structure for the JWT payload
///
/// Access and refresh tokens share the same claim set; `jti` is present
/// only on refresh tokens, where it mirrors the persisted session record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Username of the principal
    pub username: String,

    /// Opaque identifier of the client installation
    pub device_id: String,

    /// Token kind: "access" or "refresh"
    #[serde(rename = "type")]
    pub token_type: TokenKind,

    /// Refresh token identifier, mirrored by a session record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,
}

impl Claims {
    /// Creates new claims for an access token
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user's UUID
    /// * `username` - The user's username
    /// * `device_id` - Identifier of the client installation
    /// * `ttl` - Time until the token expires
    pub fn access(user_id: Uuid, username: &str, device_id: &str, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: user_id.to_string(),
            username: username.to_string(),
            device_id: device_id.to_string(),
            token_type: TokenKind::Access,
            jti: None,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            iss: JWT_ISSUER.to_string(),
        }
    }

    /// Creates new claims for a refresh token
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user's UUID
    /// * `username` - The user's username
    /// * `device_id` - Identifier of the client installation
    /// * `token_id` - Fresh identifier mirrored by the session record
    /// * `ttl` - Time until the token expires
    pub fn refresh(
        user_id: Uuid,
        username: &str,
        device_id: &str,
        token_id: &str,
        ttl: Duration,
    ) -> Self {
        let now = Utc::now();

        Self {
            sub: user_id.to_string(),
            username: username.to_string(),
            device_id: device_id.to_string(),
            token_type: TokenKind::Refresh,
            jti: Some(token_id.to_string()),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            iss: JWT_ISSUER.to_string(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Gets the user ID from the claims
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_claims() {
        let user_id = Uuid::new_v4();
        let claims = Claims::access(user_id, "alice", "device-1", Duration::minutes(15));

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.device_id, "device-1");
        assert_eq!(claims.token_type, TokenKind::Access);
        assert_eq!(claims.jti, None);
        assert_eq!(claims.iss, JWT_ISSUER);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_refresh_token_claims() {
        let user_id = Uuid::new_v4();
        let claims = Claims::refresh(user_id, "alice", "device-1", "jti-1", Duration::days(7));

        assert_eq!(claims.token_type, TokenKind::Refresh);
        assert_eq!(claims.jti.as_deref(), Some("jti-1"));
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_claims_user_id_parsing() {
        let user_id = Uuid::new_v4();
        let claims = Claims::access(user_id, "alice", "device-1", Duration::minutes(15));

        assert_eq!(claims.user_id().unwrap(), user_id);
    }

    #[test]
    fn test_claims_expiration() {
        let user_id = Uuid::new_v4();
        let claims = Claims::access(user_id, "alice", "device-1", Duration::seconds(-1));

        assert!(claims.is_expired());
    }

    #[test]
    fn test_token_type_wire_format() {
        let user_id = Uuid::new_v4();
        let claims = Claims::refresh(user_id, "alice", "device-1", "jti-1", Duration::days(7));

        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["type"], "refresh");
        assert_eq!(json["jti"], "jti-1");

        let access = Claims::access(user_id, "alice", "device-1", Duration::minutes(15));
        let json = serde_json::to_value(&access).unwrap();
        assert_eq!(json["type"], "access");
        assert!(json.get("jti").is_none());
    }

    #[test]
    fn test_claims_serialization_roundtrip() {
        let claims = Claims::refresh(Uuid::new_v4(), "bob", "device-2", "jti-2", Duration::days(7));

        let json = serde_json::to_string(&claims).unwrap();
        let deserialized: Claims = serde_json::from_str(&json).unwrap();
        assert_eq!(claims, deserialized);
    }
}
