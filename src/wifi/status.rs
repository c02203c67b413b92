//! Link status reported by the wireless stack.

use std::fmt;

/// Association state as seen by the wireless stack.
///
/// Owned and updated entirely by the stack; the connector only reads it.
/// Anything other than [`LinkStatus::Connected`] keeps the connector polling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkStatus {
    /// Driver not started, no association requested yet.
    Idle,
    /// Started but not associated.
    Disconnected,
    /// Association or address assignment in progress.
    Connecting,
    /// Associated and an address has been assigned.
    Connected,
    /// The requested SSID was not found in a scan.
    NoSsidAvailable,
    /// The access point rejected the pre-shared key.
    WrongPassword,
    /// An established link went away.
    ConnectionLost,
    /// Association failed for another reason.
    Failed,
}

impl LinkStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Disconnected => "disconnected",
            Self::Connecting => "connecting",
            Self::Connected => "connected",
            Self::NoSsidAvailable => "no-ssid-available",
            Self::WrongPassword => "wrong-password",
            Self::ConnectionLost => "connection-lost",
            Self::Failed => "failed",
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected)
    }
}

impl fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_connected_is_connected() {
        let all = [
            LinkStatus::Idle,
            LinkStatus::Disconnected,
            LinkStatus::Connecting,
            LinkStatus::Connected,
            LinkStatus::NoSsidAvailable,
            LinkStatus::WrongPassword,
            LinkStatus::ConnectionLost,
            LinkStatus::Failed,
        ];
        let connected: Vec<_> = all.iter().filter(|s| s.is_connected()).collect();
        assert_eq!(connected, vec![&LinkStatus::Connected]);
    }

    #[test]
    fn test_display() {
        assert_eq!(LinkStatus::Connecting.to_string(), "connecting");
        assert_eq!(LinkStatus::WrongPassword.to_string(), "wrong-password");
    }
}
