//! Background sweeper configuration

use serde::{Deserialize, Serialize};

/// Configuration for the expired-session sweeper
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SweeperSettings {
    /// How often the background task runs, in seconds
    pub interval_seconds: u64,

    /// Whether the background task runs at all
    pub enabled: bool,
}

impl Default for SweeperSettings {
    fn default() -> Self {
        Self {
            interval_seconds: 3600,
            enabled: true,
        }
    }
}

impl SweeperSettings {
    /// Load the sweeper configuration from environment variables
    ///
    /// Recognized variables: `SWEEPER_INTERVAL_SECONDS`, `SWEEPER_ENABLED`.
    /// Missing or malformed values fall back to the defaults (hourly,
    /// enabled).
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let interval_seconds = std::env::var("SWEEPER_INTERVAL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.interval_seconds);
        let enabled = std::env::var("SWEEPER_ENABLED")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.enabled);

        Self {
            interval_seconds,
            enabled,
        }
    }

    /// Set the background task interval in seconds
    pub fn with_interval_seconds(mut self, seconds: u64) -> Self {
        self.interval_seconds = seconds;
        self
    }

    /// Turn the background task off
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = SweeperSettings::default();
        assert_eq!(settings.interval_seconds, 3600);
        assert!(settings.enabled);
    }

    #[test]
    fn test_builders() {
        let settings = SweeperSettings::default()
            .with_interval_seconds(60)
            .disabled();
        assert_eq!(settings.interval_seconds, 60);
        assert!(!settings.enabled);
    }
}
