//! WiFi credential pair.
//!
//! Platform-independent so it can be tested on the host machine.
//!
//! # Example
//!
//! ```
//! use wifi_connector::config::WifiConfig;
//!
//! let config = WifiConfig::new("MyNetwork", "MyPassword");
//! assert!(config.validate().is_ok());
//! assert!(!config.is_open());
//! ```

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Maximum SSID length per IEEE 802.11 standard.
pub const MAX_SSID_LEN: usize = 32;

/// Maximum password length for WPA2.
pub const MAX_PASSWORD_LEN: usize = 64;

/// Minimum password length for WPA2.
pub const MIN_PASSWORD_LEN: usize = 8;

/// WiFi SSID baked in at compile time.
const BUILD_SSID: Option<&str> = option_env!("WIFI_SSID");

/// WiFi password baked in at compile time. Unset or empty means open network.
const BUILD_PASSWORD: Option<&str> = option_env!("WIFI_PASSWORD");

/// Credentials for joining an access point.
///
/// The connector passes these through to the wireless stack untouched; any
/// rejection of malformed values is up to the stack. The password is wiped
/// from memory when the value is dropped.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct WifiConfig {
    /// Network SSID.
    pub ssid: String,
    /// Pre-shared key (WPA/WPA2 passphrase), empty for open networks.
    pub password: String,
}

impl WifiConfig {
    /// Create a credential pair without validating it.
    pub fn new(ssid: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            ssid: ssid.into(),
            password: password.into(),
        }
    }

    /// Create credentials for an open network (no password).
    pub fn open(ssid: impl Into<String>) -> Self {
        Self::new(ssid, String::new())
    }

    /// Load credentials from the `WIFI_SSID` / `WIFI_PASSWORD` variables
    /// that were set when the crate was compiled.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_parts(BUILD_SSID, BUILD_PASSWORD)
    }

    fn from_parts(ssid: Option<&str>, password: Option<&str>) -> Result<Self, ConfigError> {
        match ssid {
            Some(ssid) if !ssid.is_empty() => Ok(Self::new(ssid, password.unwrap_or(""))),
            _ => Err(ConfigError::MissingSsid),
        }
    }

    /// Check the pair against 802.11 / WPA2 limits.
    ///
    /// Only configuration tooling calls this; connecting never does.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ssid.is_empty() {
            return Err(ConfigError::SsidEmpty);
        }
        if self.ssid.len() > MAX_SSID_LEN {
            return Err(ConfigError::SsidTooLong {
                len: self.ssid.len(),
                max: MAX_SSID_LEN,
            });
        }

        // Empty is OK for open networks
        if !self.password.is_empty() && self.password.len() < MIN_PASSWORD_LEN {
            return Err(ConfigError::PasswordTooShort {
                len: self.password.len(),
                min: MIN_PASSWORD_LEN,
            });
        }
        if self.password.len() > MAX_PASSWORD_LEN {
            return Err(ConfigError::PasswordTooLong {
                len: self.password.len(),
                max: MAX_PASSWORD_LEN,
            });
        }

        Ok(())
    }

    /// Check if this is an open network (no password).
    pub fn is_open(&self) -> bool {
        self.password.is_empty()
    }
}

impl fmt::Debug for WifiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WifiConfig")
            .field("ssid", &self.ssid)
            .field("password", &if self.is_open() { "(none)" } else { "****" })
            .finish()
    }
}

/// Errors that can occur while loading or checking configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No SSID was provided at build time or in the settings file.
    MissingSsid,
    /// SSID is empty.
    SsidEmpty,
    /// SSID exceeds maximum length.
    SsidTooLong { len: usize, max: usize },
    /// Password is too short for WPA2.
    PasswordTooShort { len: usize, min: usize },
    /// Password exceeds maximum length.
    PasswordTooLong { len: usize, max: usize },
    /// Settings file could not be read or parsed.
    InvalidFormat(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSsid => write!(f, "no WiFi SSID configured"),
            Self::SsidEmpty => write!(f, "SSID cannot be empty"),
            Self::SsidTooLong { len, max } => {
                write!(f, "SSID too long: {} bytes (max {})", len, max)
            }
            Self::PasswordTooShort { len, min } => {
                write!(f, "password too short: {} bytes (min {})", len, min)
            }
            Self::PasswordTooLong { len, max } => {
                write!(f, "password too long: {} bytes (max {})", len, max)
            }
            Self::InvalidFormat(msg) => write!(f, "invalid format: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_does_not_validate() {
        let config = WifiConfig::new("", "x");
        assert_eq!(config.ssid, "");
        assert_eq!(config.validate(), Err(ConfigError::SsidEmpty));
    }

    #[test]
    fn test_valid_config() {
        let config = WifiConfig::new("TestNetwork", "password123");
        assert_eq!(config.ssid, "TestNetwork");
        assert_eq!(config.password, "password123");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_open_network() {
        let config = WifiConfig::open("OpenNetwork");
        assert!(config.is_open());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_ssid_too_long() {
        let config = WifiConfig::new("a".repeat(33), "password123");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SsidTooLong { len: 33, max: 32 })
        ));
    }

    #[test]
    fn test_ssid_max_length() {
        let config = WifiConfig::new("a".repeat(32), "password123");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_password_too_short() {
        let config = WifiConfig::new("TestNetwork", "short");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PasswordTooShort { .. })
        ));
    }

    #[test]
    fn test_password_bounds() {
        assert!(WifiConfig::new("TestNetwork", "12345678").validate().is_ok());
        assert!(WifiConfig::new("TestNetwork", "a".repeat(64)).validate().is_ok());
        assert!(matches!(
            WifiConfig::new("TestNetwork", "a".repeat(65)).validate(),
            Err(ConfigError::PasswordTooLong { .. })
        ));
    }

    #[test]
    fn test_from_parts() {
        let config = WifiConfig::from_parts(Some("Home"), Some("secret-pass")).unwrap();
        assert_eq!(config.ssid, "Home");
        assert_eq!(config.password, "secret-pass");

        let open = WifiConfig::from_parts(Some("Cafe"), None).unwrap();
        assert!(open.is_open());
    }

    #[test]
    fn test_from_parts_missing_ssid() {
        assert_eq!(
            WifiConfig::from_parts(None, Some("secret-pass")),
            Err(ConfigError::MissingSsid)
        );
        assert_eq!(
            WifiConfig::from_parts(Some(""), None),
            Err(ConfigError::MissingSsid)
        );
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = WifiConfig::new("Home", "hunter2hunter2");
        let debug = format!("{:?}", config);
        assert!(debug.contains("Home"));
        assert!(!debug.contains("hunter2"));
    }
}
