//! Token signing and lifetime configuration

use serde::{Deserialize, Serialize};

/// Configuration for token signing and lifetimes
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenConfig {
    /// Secret key for signing tokens
    pub signing_secret: String,

    /// Access token expiry time in minutes
    pub access_token_expiry_minutes: i64,

    /// Refresh token expiry time in days
    pub refresh_token_expiry_days: i64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            signing_secret: String::from("development-secret-change-in-production"),
            access_token_expiry_minutes: 15,
            refresh_token_expiry_days: 7,
        }
    }
}

impl TokenConfig {
    /// Create a new token configuration with a signing secret
    pub fn new(signing_secret: impl Into<String>) -> Self {
        Self {
            signing_secret: signing_secret.into(),
            ..Default::default()
        }
    }

    /// Load the token configuration from environment variables
    ///
    /// Recognized variables: `SIGNING_SECRET`, `ACCESS_TOKEN_EXPIRY_MINUTES`,
    /// `REFRESH_TOKEN_EXPIRY_DAYS`. Missing or malformed values fall back to
    /// the defaults (15 minutes / 7 days).
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let signing_secret =
            std::env::var("SIGNING_SECRET").unwrap_or(defaults.signing_secret);
        let access_token_expiry_minutes = std::env::var("ACCESS_TOKEN_EXPIRY_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.access_token_expiry_minutes);
        let refresh_token_expiry_days = std::env::var("REFRESH_TOKEN_EXPIRY_DAYS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.refresh_token_expiry_days);

        Self {
            signing_secret,
            access_token_expiry_minutes,
            refresh_token_expiry_days,
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry_minutes = minutes;
        self
    }

    /// Set refresh token expiry in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_token_expiry_days = days;
        self
    }

    /// Check if using the default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.signing_secret == TokenConfig::default().signing_secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TokenConfig::default();
        assert_eq!(config.access_token_expiry_minutes, 15);
        assert_eq!(config.refresh_token_expiry_days, 7);
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_builders() {
        let config = TokenConfig::new("top-secret")
            .with_access_expiry_minutes(5)
            .with_refresh_expiry_days(30);
        assert_eq!(config.signing_secret, "top-secret");
        assert_eq!(config.access_token_expiry_minutes, 5);
        assert_eq!(config.refresh_token_expiry_days, 30);
        assert!(!config.is_using_default_secret());
    }
}
