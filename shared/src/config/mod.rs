//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Token signing and lifetime configuration
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection
//! - `sweeper` - Expired-session sweeper schedule

pub mod auth;
pub mod database;
pub mod environment;
pub mod sweeper;

use serde::{Deserialize, Serialize};

pub use auth::TokenConfig;
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use sweeper::SweeperSettings;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Token signing and lifetime configuration
    pub tokens: TokenConfig,

    /// Expired-session sweeper schedule
    pub sweeper: SweeperSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            database: DatabaseConfig::default(),
            tokens: TokenConfig::default(),
            sweeper: SweeperSettings::default(),
        }
    }
}

impl AppConfig {
    /// Load the full configuration from environment variables
    ///
    /// Reads the `.env` file first (if present) so that local development
    /// picks up the same variables a deployment would set.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            environment: Environment::from_env(),
            database: DatabaseConfig::from_env(),
            tokens: TokenConfig::from_env(),
            sweeper: SweeperSettings::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.tokens.access_token_expiry_minutes, 15);
        assert_eq!(config.tokens.refresh_token_expiry_days, 7);
        assert_eq!(config.sweeper.interval_seconds, 3600);
        assert!(config.sweeper.enabled);
    }
}
