//! Best-effort deletion of expired session records
//!
//! The sweeper exists purely for storage hygiene: token expiry is enforced
//! cryptographically at verification time, so removing an expired record can
//! never affect an in-flight rotation.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::errors::DomainResult;
use crate::repositories::SessionStore;

/// Configuration for the background sweeper
#[derive(Debug, Clone)]
pub struct SweeperConfig {
    /// How often the background task runs (in seconds)
    pub interval_seconds: u64,
    /// Whether the background task is enabled
    pub enabled: bool,
}

impl Default for SweeperConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 3600, // Run every hour
            enabled: true,
        }
    }
}

impl From<&sg_shared::config::SweeperSettings> for SweeperConfig {
    fn from(settings: &sg_shared::config::SweeperSettings) -> Self {
        Self {
            interval_seconds: settings.interval_seconds,
            enabled: settings.enabled,
        }
    }
}

/// Deletes session records whose expiry has passed
///
/// Invoked opportunistically after every session issuance and optionally on
/// a fixed schedule. Idempotent and side-effect-only; cleanup is advisory,
/// so failures are logged and never interrupt the caller's flow.
pub struct Sweeper<S: SessionStore + 'static> {
    store: Arc<S>,
    config: SweeperConfig,
}

impl<S: SessionStore> Sweeper<S> {
    /// Create a new sweeper over the given store
    pub fn new(store: Arc<S>, config: SweeperConfig) -> Self {
        Self { store, config }
    }

    /// The schedule this sweeper runs on
    pub fn config(&self) -> &SweeperConfig {
        &self.config
    }

    /// Delete every record whose expiry precedes `now`
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of records removed
    pub async fn sweep(&self, now: DateTime<Utc>) -> DomainResult<usize> {
        self.store.delete_expired_before(now).await
    }

    /// Run one sweep, swallowing failures
    ///
    /// Returns the number of records removed, or zero if the sweep failed.
    pub async fn sweep_best_effort(&self, now: DateTime<Utc>) -> usize {
        match self.sweep(now).await {
            Ok(deleted) => {
                if deleted > 0 {
                    info!("Swept {} expired session records", deleted);
                }
                deleted
            }
            Err(e) => {
                warn!("Session sweep failed: {}", e);
                0
            }
        }
    }

    /// Start the sweeper as a background task
    ///
    /// Spawns a tokio task that sweeps at the configured interval.
    pub fn start_background_task(self: Arc<Self>) {
        if !self.config.enabled {
            warn!("Session sweeper is disabled");
            return;
        }

        let interval = std::time::Duration::from_secs(self.config.interval_seconds);

        tokio::spawn(async move {
            info!(
                "Session sweeper started - will run every {} seconds",
                self.config.interval_seconds
            );

            let mut interval_timer = tokio::time::interval(interval);

            loop {
                interval_timer.tick().await;

                match self.sweep(Utc::now()).await {
                    Ok(deleted) => {
                        if deleted > 0 {
                            info!("Swept {} expired session records", deleted);
                        }
                    }
                    Err(e) => {
                        error!("Session sweep cycle failed: {}", e);
                    }
                }
            }
        });
    }
}
