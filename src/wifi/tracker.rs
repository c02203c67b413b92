//! Association bookkeeping for event-driven WiFi drivers.
//!
//! ESP-IDF reports link changes through system events and, unlike the
//! ESP8266 Arduino stack, does not retry a failed association by itself.
//! The driver's event callback feeds this tracker; it decides when a new
//! connect request is due and turns the raw driver flags into a
//! [`LinkStatus`]. Shared between the callback and the polling thread, so
//! all state is atomic.

use super::LinkStatus;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

/// What the driver reports when queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverState {
    pub started: bool,
    /// `None` when the driver query itself failed.
    pub associated: Option<bool>,
    pub netif_up: bool,
}

#[derive(Debug, Default)]
pub struct AssociationTracker {
    requested: AtomicBool,
    dropped: AtomicBool,
    reconnects: AtomicU32,
}

impl AssociationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// A connect request was issued for new credentials.
    pub fn on_requested(&self) {
        self.dropped.store(false, Ordering::SeqCst);
        self.reconnects.store(0, Ordering::SeqCst);
        self.requested.store(true, Ordering::SeqCst);
    }

    /// The station associated with the access point.
    pub fn on_connected(&self) {
        self.dropped.store(false, Ordering::SeqCst);
    }

    /// The station lost or failed to establish association.
    ///
    /// Returns `true` when the caller should issue another connect request.
    pub fn on_disconnected(&self) -> bool {
        if !self.requested.load(Ordering::SeqCst) {
            return false;
        }
        self.dropped.store(true, Ordering::SeqCst);
        self.reconnects.fetch_add(1, Ordering::SeqCst);
        true
    }

    /// Connect requests re-issued since the last `on_requested`.
    pub fn reconnects(&self) -> u32 {
        self.reconnects.load(Ordering::SeqCst)
    }

    pub fn status(&self, driver: DriverState) -> LinkStatus {
        if !driver.started {
            return LinkStatus::Idle;
        }
        if driver.netif_up {
            return LinkStatus::Connected;
        }

        match driver.associated {
            // Associated, waiting for DHCP
            Some(true) => LinkStatus::Connecting,
            Some(false) if self.dropped.load(Ordering::SeqCst) => LinkStatus::Disconnected,
            Some(false) if self.requested.load(Ordering::SeqCst) => LinkStatus::Connecting,
            Some(false) => LinkStatus::Disconnected,
            None => LinkStatus::Failed,
        }
    }
}
