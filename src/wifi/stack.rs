//! Wireless stack abstraction.
//!
//! This trait is the seam between the connector and the vendor WiFi driver,
//! so the same polling logic runs against ESP-IDF on the device and against
//! a simulated stack on the host.

use super::LinkStatus;
use crate::config::WifiConfig;
use std::fmt;
use std::net::IpAddr;

/// Operations the connector needs from a WiFi driver.
pub trait WirelessStack {
    /// Request association with the access point named in `config`.
    ///
    /// Fire-and-forget: returning `Ok` only means the request was accepted,
    /// progress is observed through [`WirelessStack::status`].
    fn begin_association(&mut self, config: &WifiConfig) -> Result<(), StackError>;

    /// Current link status. Must not change driver state.
    fn status(&self) -> LinkStatus;

    /// Address assigned to the station interface.
    ///
    /// Only meaningful once [`WirelessStack::status`] reports `Connected`.
    fn assigned_address(&self) -> Option<IpAddr>;
}

/// Errors raised by a stack while accepting an association request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackError {
    /// SSID does not fit the driver's configuration (too long, bad bytes).
    InvalidSsid,
    /// Password does not fit the driver's configuration.
    InvalidPassword,
    /// The driver reported an error.
    Driver(String),
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSsid => write!(f, "invalid SSID"),
            Self::InvalidPassword => write!(f, "invalid password"),
            Self::Driver(msg) => write!(f, "driver error: {}", msg),
        }
    }
}

impl std::error::Error for StackError {}

#[cfg(feature = "esp32")]
impl From<esp_idf_svc::sys::EspError> for StackError {
    fn from(e: esp_idf_svc::sys::EspError) -> Self {
        Self::Driver(format!("{:?}", e))
    }
}
