//! Simulated wireless stack for host builds.
//!
//! On the host there is no radio to drive, so this stack models a handful of
//! access points instead. Association outcome depends only on the requested
//! credentials and on how much time has passed since the request, which
//! keeps status queries free of side effects.

use super::{LinkStatus, StackError, WirelessStack};
use crate::config::WifiConfig;
use log::debug;
use std::fmt;
use std::net::IpAddr;
use std::time::{Duration, Instant};

/// Time an access point takes to associate and hand out an address.
pub const DEFAULT_ASSOCIATION_DELAY: Duration = Duration::from_secs(2);

/// An access point the simulated stack can see.
#[derive(Clone)]
pub struct SimulatedAccessPoint {
    ssid: String,
    passphrase: String,
    address: IpAddr,
    delay: Duration,
}

impl SimulatedAccessPoint {
    /// A WPA2 access point handing out `address`. An empty `passphrase`
    /// makes it an open network.
    pub fn new(ssid: impl Into<String>, passphrase: impl Into<String>, address: IpAddr) -> Self {
        Self {
            ssid: ssid.into(),
            passphrase: passphrase.into(),
            address,
            delay: DEFAULT_ASSOCIATION_DELAY,
        }
    }

    pub fn open(ssid: impl Into<String>, address: IpAddr) -> Self {
        Self::new(ssid, String::new(), address)
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn ssid(&self) -> &str {
        &self.ssid
    }
}

impl fmt::Debug for SimulatedAccessPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let passphrase = if self.passphrase.is_empty() { "(none)" } else { "****" };
        f.debug_struct("SimulatedAccessPoint")
            .field("ssid", &self.ssid)
            .field("passphrase", &passphrase)
            .field("address", &self.address)
            .field("delay", &self.delay)
            .finish()
    }
}

struct Attempt {
    credentials: WifiConfig,
    started: Instant,
}

/// Host-side [`WirelessStack`] backed by [`SimulatedAccessPoint`]s.
pub struct SimulatedStack {
    access_points: Vec<SimulatedAccessPoint>,
    attempt: Option<Attempt>,
}

impl SimulatedStack {
    pub fn new(access_points: Vec<SimulatedAccessPoint>) -> Self {
        Self {
            access_points,
            attempt: None,
        }
    }

    fn find(&self, ssid: &str) -> Option<&SimulatedAccessPoint> {
        self.access_points.iter().find(|ap| ap.ssid == ssid)
    }

    /// Status and, when connected, the access point that accepted us.
    fn evaluate(&self) -> (LinkStatus, Option<&SimulatedAccessPoint>) {
        let Some(attempt) = &self.attempt else {
            return (LinkStatus::Idle, None);
        };
        let Some(ap) = self.find(&attempt.credentials.ssid) else {
            return (LinkStatus::NoSsidAvailable, None);
        };

        if attempt.started.elapsed() < ap.delay {
            (LinkStatus::Connecting, None)
        } else if attempt.credentials.password != ap.passphrase {
            (LinkStatus::WrongPassword, None)
        } else {
            (LinkStatus::Connected, Some(ap))
        }
    }
}

impl WirelessStack for SimulatedStack {
    fn begin_association(&mut self, config: &WifiConfig) -> Result<(), StackError> {
        debug!(
            "Simulated association with {} ({} access points visible)",
            config.ssid,
            self.access_points.len()
        );
        self.attempt = Some(Attempt {
            credentials: config.clone(),
            started: Instant::now(),
        });
        Ok(())
    }

    fn status(&self) -> LinkStatus {
        self.evaluate().0
    }

    fn assigned_address(&self) -> Option<IpAddr> {
        self.evaluate().1.map(|ap| ap.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    const ADDR: IpAddr = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 42));

    fn home() -> SimulatedAccessPoint {
        SimulatedAccessPoint::new("Home", "password123", ADDR).with_delay(Duration::ZERO)
    }

    #[test]
    fn test_idle_before_association() {
        let stack = SimulatedStack::new(vec![home()]);
        assert_eq!(stack.status(), LinkStatus::Idle);
        assert_eq!(stack.assigned_address(), None);
    }

    #[test]
    fn test_connects_with_right_password() {
        let mut stack = SimulatedStack::new(vec![home()]);
        stack
            .begin_association(&WifiConfig::new("Home", "password123"))
            .unwrap();
        assert_eq!(stack.status(), LinkStatus::Connected);
        assert_eq!(stack.assigned_address(), Some(ADDR));
    }

    #[test]
    fn test_wrong_password() {
        let mut stack = SimulatedStack::new(vec![home()]);
        stack
            .begin_association(&WifiConfig::new("Home", "not-the-password"))
            .unwrap();
        assert_eq!(stack.status(), LinkStatus::WrongPassword);
        assert_eq!(stack.assigned_address(), None);
    }

    #[test]
    fn test_unknown_ssid() {
        let mut stack = SimulatedStack::new(vec![home()]);
        stack
            .begin_association(&WifiConfig::new("Elsewhere", "password123"))
            .unwrap();
        assert_eq!(stack.status(), LinkStatus::NoSsidAvailable);
    }

    #[test]
    fn test_open_network_accepts_empty_key() {
        let ap = SimulatedAccessPoint::open("Cafe", ADDR).with_delay(Duration::ZERO);
        let mut stack = SimulatedStack::new(vec![ap]);
        stack.begin_association(&WifiConfig::open("Cafe")).unwrap();
        assert_eq!(stack.status(), LinkStatus::Connected);
    }

    #[test]
    fn test_connecting_until_delay_elapses() {
        let ap = home().with_delay(Duration::from_millis(30));
        let mut stack = SimulatedStack::new(vec![ap]);
        stack
            .begin_association(&WifiConfig::new("Home", "password123"))
            .unwrap();
        assert_eq!(stack.status(), LinkStatus::Connecting);
        assert_eq!(stack.assigned_address(), None);

        std::thread::sleep(Duration::from_millis(40));
        assert_eq!(stack.status(), LinkStatus::Connected);
    }

    #[test]
    fn test_status_query_is_idempotent() {
        let ap = home().with_delay(Duration::from_secs(3600));
        let mut stack = SimulatedStack::new(vec![ap]);
        stack
            .begin_association(&WifiConfig::new("Home", "password123"))
            .unwrap();

        let first = stack.status();
        for _ in 0..100 {
            assert_eq!(stack.status(), first);
        }
        assert_eq!(first, LinkStatus::Connecting);
    }

    #[test]
    fn test_debug_redacts_passphrase() {
        let debug = format!("{:?}", home());
        assert!(debug.contains("Home"));
        assert!(debug.contains("****"));
        assert!(!debug.contains("password123"));

        let open = format!("{:?}", SimulatedAccessPoint::open("Cafe", ADDR));
        assert!(open.contains("(none)"));
    }

    #[test]
    fn test_reassociation_replaces_attempt() {
        let mut stack = SimulatedStack::new(vec![home()]);
        stack
            .begin_association(&WifiConfig::new("Home", "wrong-password"))
            .unwrap();
        assert_eq!(stack.status(), LinkStatus::WrongPassword);

        stack
            .begin_association(&WifiConfig::new("Home", "password123"))
            .unwrap();
        assert_eq!(stack.status(), LinkStatus::Connected);
    }
}
