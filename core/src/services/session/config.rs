//! Configuration for the session service

use chrono::Duration;
use sg_shared::config::{AppConfig, TokenConfig};

use crate::domain::entities::token::{ACCESS_TOKEN_EXPIRY_MINUTES, REFRESH_TOKEN_EXPIRY_DAYS};

use super::sweeper::SweeperConfig;

/// Configuration for the session service
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Secret for signing tokens
    pub signing_secret: String,
    /// Access token expiry in minutes
    pub access_token_expiry_minutes: i64,
    /// Refresh token expiry in days
    pub refresh_token_expiry_days: i64,
    /// Schedule for the expired-record sweeper
    pub sweeper: SweeperConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            signing_secret: "development-secret-change-in-production".to_string(),
            access_token_expiry_minutes: ACCESS_TOKEN_EXPIRY_MINUTES,
            refresh_token_expiry_days: REFRESH_TOKEN_EXPIRY_DAYS,
            sweeper: SweeperConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Access token time-to-live
    pub fn access_ttl(&self) -> Duration {
        Duration::minutes(self.access_token_expiry_minutes)
    }

    /// Refresh token time-to-live
    pub fn refresh_ttl(&self) -> Duration {
        Duration::days(self.refresh_token_expiry_days)
    }
}

impl From<&TokenConfig> for SessionConfig {
    fn from(config: &TokenConfig) -> Self {
        Self {
            signing_secret: config.signing_secret.clone(),
            access_token_expiry_minutes: config.access_token_expiry_minutes,
            refresh_token_expiry_days: config.refresh_token_expiry_days,
            sweeper: SweeperConfig::default(),
        }
    }
}

impl From<&AppConfig> for SessionConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            signing_secret: config.tokens.signing_secret.clone(),
            access_token_expiry_minutes: config.tokens.access_token_expiry_minutes,
            refresh_token_expiry_days: config.tokens.refresh_token_expiry_days,
            sweeper: SweeperConfig::from(&config.sweeper),
        }
    }
}
