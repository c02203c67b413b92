//! Connector configuration.
//!
//! # Components
//!
//! - [`WifiConfig`] - credential pair (host-testable)
//! - [`ConnectorConfig`] - poll interval and optional timeout
//! - [`ConnectorSettings`] - JSON settings file (host only)

mod connector;
#[cfg(not(target_os = "espidf"))]
mod file;
mod wifi;

pub use connector::{ConnectorConfig, DEFAULT_POLL_INTERVAL};
#[cfg(not(target_os = "espidf"))]
pub use file::ConnectorSettings;
pub use wifi::{ConfigError, WifiConfig, MAX_PASSWORD_LEN, MAX_SSID_LEN, MIN_PASSWORD_LEN};
