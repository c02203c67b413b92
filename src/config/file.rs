//! JSON settings file for host builds.
//!
//! ```json
//! {
//!   "ssid": "MyNetwork",
//!   "password": "secret-pass",
//!   "poll_interval_ms": 500,
//!   "timeout_secs": 30
//! }
//! ```
//!
//! `password`, `poll_interval_ms` and `timeout_secs` are optional. A missing
//! timeout means wait forever.

use super::{ConfigError, ConnectorConfig, WifiConfig, DEFAULT_POLL_INTERVAL};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

#[derive(Deserialize)]
struct SettingsFile {
    ssid: String,
    #[serde(default)]
    password: String,
    poll_interval_ms: Option<u64>,
    timeout_secs: Option<u64>,
}

/// Credentials plus polling parameters loaded from disk.
#[derive(Debug, Clone)]
pub struct ConnectorSettings {
    pub wifi: WifiConfig,
    pub connector: ConnectorConfig,
}

impl ConnectorSettings {
    /// Parse settings from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let file: SettingsFile =
            serde_json::from_str(json).map_err(|e| ConfigError::InvalidFormat(e.to_string()))?;

        if file.ssid.is_empty() {
            return Err(ConfigError::MissingSsid);
        }

        let poll_interval = file
            .poll_interval_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_POLL_INTERVAL);

        Ok(Self {
            wifi: WifiConfig::new(file.ssid, file.password),
            connector: ConnectorConfig {
                poll_interval,
                timeout: file.timeout_secs.map(Duration::from_secs),
            },
        })
    }

    /// Read and parse a JSON settings file.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::InvalidFormat(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json(&json)
    }
}
