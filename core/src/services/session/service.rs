//! Main session service implementation

use chrono::Utc;
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use crate::domain::entities::session::SessionRecord;
use crate::domain::entities::token::{Claims, TokenKind};
use crate::domain::entities::user::User;
use crate::domain::value_objects::SessionTokens;
use crate::errors::{AuthError, DomainResult, TokenError};
use crate::repositories::{SessionStore, UserRepository};
use crate::services::token::TokenCodec;

use super::config::SessionConfig;
use super::sweeper::Sweeper;

/// Service orchestrating the session/token lifecycle
///
/// Issues access/refresh pairs per (user, device), rotates refresh tokens
/// one-time-use, detects replayed tokens and locks out the affected device,
/// and performs device-scoped revocation. Calls are request-scoped and may
/// run concurrently; correctness rests on the store's atomic
/// `revoke_if_active` primitive, not on any cross-request lock.
pub struct SessionService<S: SessionStore + 'static, U: UserRepository> {
    store: Arc<S>,
    user_repository: Arc<U>,
    codec: TokenCodec,
    sweeper: Sweeper<S>,
    config: SessionConfig,
}

impl<S: SessionStore, U: UserRepository> SessionService<S, U> {
    /// Creates a new session service
    ///
    /// # Arguments
    ///
    /// * `store` - Session record persistence
    /// * `user_repository` - Principal lookup
    /// * `config` - Signing secret and token lifetimes
    pub fn new(store: Arc<S>, user_repository: Arc<U>, config: SessionConfig) -> Self {
        let codec = TokenCodec::new(&config.signing_secret);
        let sweeper = Sweeper::new(Arc::clone(&store), config.sweeper.clone());

        Self {
            store,
            user_repository,
            codec,
            sweeper,
            config,
        }
    }

    /// Issues a new access/refresh pair for a user on one device
    ///
    /// Generates a fresh device id when the caller does not supply one,
    /// persists a session record mirroring the refresh token, and runs the
    /// sweeper best-effort before returning.
    ///
    /// # Arguments
    ///
    /// * `user` - The authenticated principal
    /// * `device_id` - Identifier of the client installation, if known
    pub async fn generate_session(
        &self,
        user: &User,
        device_id: Option<String>,
    ) -> DomainResult<SessionTokens> {
        let device_id = device_id.unwrap_or_else(|| Uuid::new_v4().to_string());

        let access_claims = Claims::access(
            user.id,
            &user.username,
            &device_id,
            self.config.access_ttl(),
        );
        let access_token = self.codec.encode(&access_claims)?;

        let token_id = Uuid::new_v4().to_string();
        let refresh_claims = Claims::refresh(
            user.id,
            &user.username,
            &device_id,
            &token_id,
            self.config.refresh_ttl(),
        );
        let refresh_token = self.codec.encode(&refresh_claims)?;

        let record = SessionRecord::new(
            token_id,
            user.id,
            device_id.clone(),
            self.config.refresh_ttl(),
        );
        self.store.insert(record).await?;

        self.sweeper.sweep_best_effort(Utc::now()).await;

        Ok(SessionTokens::new(access_token, refresh_token, device_id))
    }

    /// Consumes a refresh token and mints a fresh pair
    ///
    /// The presented token is usable at most once. Presenting it again after
    /// consumption is treated as a reuse event: the token was either
    /// exfiltrated and replayed by an attacker, or replayed by a stale
    /// client; in both cases every session for the device is revoked.
    ///
    /// # Returns
    ///
    /// * `Ok(SessionTokens)` - New pair under a fresh token id
    /// * `Err(TokenError::InvalidToken)` - Verification failed, wrong token
    ///   kind, or no session record was ever issued for the token
    /// * `Err(TokenError::ReuseDetected)` - The token was already consumed;
    ///   the whole device has been locked out
    /// * `Err(AuthError::UserNotFound)` - The principal no longer exists
    pub async fn rotate(&self, refresh_token: &str) -> DomainResult<SessionTokens> {
        let claims = self
            .codec
            .decode(refresh_token)
            .map_err(|_| TokenError::InvalidToken)?;

        if claims.token_type != TokenKind::Refresh {
            return Err(TokenError::InvalidToken.into());
        }
        let token_id = claims.jti.as_deref().ok_or(TokenError::InvalidToken)?;

        // Atomic one-time consumption. The conditional update is the only
        // point where concurrent rotations of the same token are ordered.
        if !self.store.revoke_if_active(token_id).await? {
            return match self.store.find_by_token_id(token_id).await? {
                // Never issued, or already purged by the sweeper.
                None => Err(TokenError::InvalidToken.into()),
                // Already consumed: reuse event. Lock out the whole device,
                // not just this token.
                Some(_) => {
                    let removed = self.store.delete_all_for_device(&claims.device_id).await?;
                    warn!(
                        device_id = %claims.device_id,
                        sessions_revoked = removed,
                        "refresh token replayed after consumption; device locked out"
                    );
                    Err(TokenError::ReuseDetected.into())
                }
            };
        }

        let user = self
            .user_repository
            .find_by_username(&claims.username)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        self.generate_session(&user, Some(claims.device_id)).await
    }

    /// Revokes every session for a device
    ///
    /// Idempotent: revoking a device with no sessions is a successful no-op.
    pub async fn revoke_device(&self, device_id: &str) -> DomainResult<()> {
        self.store.delete_all_for_device(device_id).await?;
        Ok(())
    }

    /// Ends the session chain for the device named in a refresh token
    ///
    /// Only the signature has to hold; an expired token still identifies the
    /// device, and revocation state of this particular token is irrelevant.
    pub async fn logout(&self, refresh_token: &str) -> DomainResult<()> {
        let claims = self
            .codec
            .decode_allowing_expired(refresh_token)
            .map_err(|_| TokenError::InvalidToken)?;

        self.revoke_device(&claims.device_id).await
    }

    /// Verifies an access token and returns its claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid and of access kind
    /// * `Err(TokenError::InvalidToken)` - Verification failed or the token
    ///   is not an access token
    pub fn verify_access_token(&self, token: &str) -> DomainResult<Claims> {
        let claims = self
            .codec
            .decode(token)
            .map_err(|_| TokenError::InvalidToken)?;

        if claims.token_type != TokenKind::Access {
            return Err(TokenError::InvalidToken.into());
        }

        Ok(claims)
    }

    /// The sweeper bound to this service's store
    pub fn sweeper(&self) -> &Sweeper<S> {
        &self.sweeper
    }
}
