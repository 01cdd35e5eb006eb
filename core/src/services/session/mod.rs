//! Session lifecycle module
//!
//! This module owns the refresh-session state machine:
//! - issuing access/refresh token pairs per (user, device)
//! - one-time-use rotation with reuse detection and device lockout
//! - device-scoped revocation and logout
//! - best-effort sweeping of expired session records

mod config;
mod service;
mod sweeper;

#[cfg(test)]
mod tests;

pub use config::SessionConfig;
pub use service::SessionService;
pub use sweeper::{Sweeper, SweeperConfig};
