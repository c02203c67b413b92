//! WiFi connection bring-up for ESP32 firmware.
//!
//! This library contains platform-independent components that can be tested
//! on the host machine without ESP32 hardware. The ESP-IDF driver wrapper is
//! only compiled with the `esp32` feature.

pub mod config;
pub mod wifi;

// Re-export commonly used items
pub use config::{ConfigError, ConnectorConfig, WifiConfig};
pub use wifi::{ConnectError, ConnectOutcome, Connector, LinkStatus, StackError, WirelessStack};
