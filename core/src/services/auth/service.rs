//! Main authentication service implementation

use std::sync::Arc;
use tracing::info;

use crate::domain::entities::user::User;
use crate::domain::value_objects::SessionTokens;
use crate::errors::{AuthError, DomainResult, TokenError};
use crate::repositories::{SessionStore, UserRepository};
use crate::services::session::SessionService;

use super::password::PasswordVerifier;
use super::strategy::{AuthenticatedPrincipal, Credential};

/// Authentication facade over the session service
///
/// Handles registration and login, authenticates presented credentials, and
/// forwards refresh/logout to the session lifecycle.
pub struct AuthService<U, S, P>
where
    U: UserRepository,
    S: SessionStore + 'static,
    P: PasswordVerifier,
{
    /// User repository for principal lookup and creation
    user_repository: Arc<U>,
    /// Session lifecycle service
    session_service: Arc<SessionService<S, U>>,
    /// Password hashing collaborator
    password_verifier: Arc<P>,
}

impl<U, S, P> AuthService<U, S, P>
where
    U: UserRepository,
    S: SessionStore + 'static,
    P: PasswordVerifier,
{
    /// Creates a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        session_service: Arc<SessionService<S, U>>,
        password_verifier: Arc<P>,
    ) -> Self {
        Self {
            user_repository,
            session_service,
            password_verifier,
        }
    }

    /// Registers a new user and opens their first session
    ///
    /// # Returns
    ///
    /// * `Ok(SessionTokens)` - Credentials for the new session
    /// * `Err(AuthError::UserAlreadyExists)` - The username is taken
    pub async fn register(&self, username: &str, password: &str) -> DomainResult<SessionTokens> {
        if self
            .user_repository
            .find_by_username(username)
            .await?
            .is_some()
        {
            return Err(AuthError::UserAlreadyExists.into());
        }

        let password_hash = self.password_verifier.hash(password)?;
        let user = self
            .user_repository
            .insert(User::new(username, password_hash))
            .await?;

        info!(username = %user.username, "registered new user");

        self.session_service.generate_session(&user, None).await
    }

    /// Logs a user in and opens a session on a fresh device id
    ///
    /// Unknown usernames and wrong passwords are indistinguishable to the
    /// caller.
    pub async fn login(&self, username: &str, password: &str) -> DomainResult<SessionTokens> {
        let user = self.validate_user(username, password).await?;
        self.session_service.generate_session(&user, None).await
    }

    /// Rotates a refresh token into a fresh pair
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<SessionTokens> {
        if refresh_token.is_empty() {
            return Err(AuthError::MissingToken.into());
        }
        self.session_service.rotate(refresh_token).await
    }

    /// Ends every session for the device named in the refresh token
    pub async fn logout(&self, refresh_token: &str) -> DomainResult<()> {
        if refresh_token.is_empty() {
            return Err(AuthError::MissingToken.into());
        }
        self.session_service.logout(refresh_token).await
    }

    /// Authenticates a presented credential
    ///
    /// # Returns
    ///
    /// * `Ok(AuthenticatedPrincipal)` - The established identity
    /// * `Err(AuthError::InvalidCredentials)` - Password mismatch
    /// * `Err(TokenError::InvalidToken)` - Bearer token rejected
    pub async fn authenticate(
        &self,
        credential: Credential<'_>,
    ) -> DomainResult<AuthenticatedPrincipal> {
        match credential {
            Credential::Password { username, password } => {
                let user = self.validate_user(username, password).await?;
                Ok(AuthenticatedPrincipal {
                    user_id: user.id,
                    username: user.username,
                    device_id: None,
                })
            }
            Credential::Bearer { token } => {
                let claims = self.session_service.verify_access_token(token)?;
                let user_id = claims
                    .user_id()
                    .map_err(|_| TokenError::InvalidToken)?;
                Ok(AuthenticatedPrincipal {
                    user_id,
                    username: claims.username,
                    device_id: Some(claims.device_id),
                })
            }
        }
    }

    async fn validate_user(&self, username: &str, password: &str) -> DomainResult<User> {
        let user = self
            .user_repository
            .find_by_username(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.password_verifier.verify(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }
}
