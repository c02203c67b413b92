//! WiFi connection establishment.
//!
//! # Components
//!
//! - [`connector`] - polls a stack until it connects (host-testable)
//! - [`stack`] - the [`WirelessStack`] trait the connector drives
//! - [`sim`] - simulated stack for host builds
//! - [`tracker`] - retry and status bookkeeping for event-driven drivers
//! - [`esp`] - ESP-IDF WiFi driver wrapper (ESP32 only)

mod connector;
#[cfg(feature = "esp32")]
mod esp;
mod sim;
mod stack;
mod status;
mod tracker;

pub use connector::{ConnectError, ConnectOutcome, Connector};
#[cfg(feature = "esp32")]
pub use esp::EspWirelessStack;
pub use sim::{SimulatedAccessPoint, SimulatedStack, DEFAULT_ASSOCIATION_DELAY};
pub use stack::{StackError, WirelessStack};
pub use status::LinkStatus;
pub use tracker::{AssociationTracker, DriverState};
