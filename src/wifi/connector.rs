//! Blocking and async WiFi connector.
//!
//! The connector asks the stack to associate, then polls its status at a
//! fixed interval until it reports `Connected`, printing one `.` per
//! unsuccessful poll to the diagnostic sink:
//!
//! ```text
//! Connecting to WiFi
//! ......
//! Connected to MyNetwork
//! IP address: 192.168.1.100
//! ```
//!
//! [`Connector::establish_connection`] is the unbounded form: it returns
//! only once the stack connects. [`Connector::connect`] and
//! [`Connector::connect_async`] add a configurable timeout and a
//! [`CancellationToken`] and report how the wait ended.

use super::{LinkStatus, StackError, WirelessStack};
use crate::config::{ConnectorConfig, WifiConfig};
use log::{debug, info, warn};
use std::fmt;
use std::io::Write;
use std::net::IpAddr;
use std::time::Instant;
use tokio_util::sync::CancellationToken;

/// How a bounded connection attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectOutcome {
    /// The stack reported `Connected` with this address.
    Connected(IpAddr),
    /// The configured timeout elapsed first.
    TimedOut,
    /// The cancellation token fired first.
    Cancelled,
}

impl fmt::Display for ConnectOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connected(ip) => write!(f, "connected ({})", ip),
            Self::TimedOut => write!(f, "timed out"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Polls a [`WirelessStack`] until it connects.
pub struct Connector<S, W> {
    stack: S,
    sink: W,
    config: ConnectorConfig,
    /// Status polls made during the current attempt.
    polls: u64,
}

impl<S: WirelessStack, W: Write> Connector<S, W> {
    /// Create a connector over `stack` that reports progress to `sink`.
    pub fn new(stack: S, sink: W, config: ConnectorConfig) -> Self {
        Self {
            stack,
            sink,
            config,
            polls: 0,
        }
    }

    pub fn stack(&self) -> &S {
        &self.stack
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    /// Connect and block until the stack reports `Connected`.
    ///
    /// There is no timeout here regardless of [`ConnectorConfig::timeout`]:
    /// if the access point is unreachable or rejects the credentials this
    /// never returns. Errors only come from the stack refusing the request
    /// or connecting without an address.
    pub fn establish_connection(&mut self, wifi: &WifiConfig) -> Result<IpAddr, ConnectError> {
        self.start(wifi)?;

        loop {
            if let Some(ip) = self.poll()? {
                self.report_connected(&wifi.ssid, ip);
                return Ok(ip);
            }
            std::thread::sleep(self.config.poll_interval);
            self.mark_progress();
        }
    }

    /// Connect, blocking until connected, timed out or cancelled.
    ///
    /// `cancel` is checked before every poll, so a token fired from another
    /// thread takes effect within one poll interval.
    pub fn connect(
        &mut self,
        wifi: &WifiConfig,
        cancel: &CancellationToken,
    ) -> Result<ConnectOutcome, ConnectError> {
        let deadline = self.config.timeout.map(|timeout| Instant::now() + timeout);
        self.start(wifi)?;

        loop {
            if cancel.is_cancelled() {
                return Ok(self.give_up(&wifi.ssid, ConnectOutcome::Cancelled));
            }
            if let Some(ip) = self.poll()? {
                self.report_connected(&wifi.ssid, ip);
                return Ok(ConnectOutcome::Connected(ip));
            }
            if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
                return Ok(self.give_up(&wifi.ssid, ConnectOutcome::TimedOut));
            }
            std::thread::sleep(self.config.poll_interval);
            self.mark_progress();
        }
    }

    /// Async form of [`Connector::connect`].
    ///
    /// The sleep between polls races the token and the deadline, so either
    /// one ends the wait immediately. A cancelled sleep still prints its
    /// progress marker, so both forms print one marker per unsuccessful
    /// poll before giving up on cancellation.
    pub async fn connect_async(
        &mut self,
        wifi: &WifiConfig,
        cancel: &CancellationToken,
    ) -> Result<ConnectOutcome, ConnectError> {
        let deadline = self
            .config
            .timeout
            .map(|timeout| tokio::time::Instant::now() + timeout);
        self.start(wifi)?;

        loop {
            if cancel.is_cancelled() {
                return Ok(self.give_up(&wifi.ssid, ConnectOutcome::Cancelled));
            }
            if let Some(ip) = self.poll()? {
                self.report_connected(&wifi.ssid, ip);
                return Ok(ConnectOutcome::Connected(ip));
            }

            let deadline_reached = async {
                match deadline {
                    Some(deadline) => tokio::time::sleep_until(deadline).await,
                    None => std::future::pending().await,
                }
            };

            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    // The poll was unsuccessful, same as the blocking wait
                    self.mark_progress();
                    return Ok(self.give_up(&wifi.ssid, ConnectOutcome::Cancelled));
                }
                _ = deadline_reached => {
                    return Ok(self.give_up(&wifi.ssid, ConnectOutcome::TimedOut));
                }
                _ = tokio::time::sleep(self.config.poll_interval) => {
                    self.mark_progress();
                }
            }
        }
    }

    fn start(&mut self, wifi: &WifiConfig) -> Result<(), ConnectError> {
        self.polls = 0;
        info!("Connecting to WiFi: {}", wifi.ssid);
        let _ = writeln!(self.sink, "Connecting to WiFi");

        self.stack.begin_association(wifi)?;
        Ok(())
    }

    /// Query the stack once. `Some` means connected.
    fn poll(&mut self) -> Result<Option<IpAddr>, ConnectError> {
        self.polls += 1;
        let status = self.stack.status();

        match status {
            LinkStatus::Connected => self
                .stack
                .assigned_address()
                .map(Some)
                .ok_or(ConnectError::NoAddress),
            // The stack may or may not recover from these; keep waiting
            LinkStatus::Idle
            | LinkStatus::Disconnected
            | LinkStatus::Connecting
            | LinkStatus::NoSsidAvailable
            | LinkStatus::WrongPassword
            | LinkStatus::ConnectionLost
            | LinkStatus::Failed => {
                debug!("WiFi status after poll {}: {}", self.polls, status);
                Ok(None)
            }
        }
    }

    fn mark_progress(&mut self) {
        let _ = write!(self.sink, ".");
        let _ = self.sink.flush();
    }

    fn report_connected(&mut self, ssid: &str, ip: IpAddr) {
        info!("Connected to WiFi after {} polls, IP: {}", self.polls, ip);
        let _ = writeln!(self.sink);
        let _ = writeln!(self.sink, "Connected to {}", ssid);
        let _ = writeln!(self.sink, "IP address: {}", ip);
        let _ = self.sink.flush();
    }

    fn give_up(&mut self, ssid: &str, outcome: ConnectOutcome) -> ConnectOutcome {
        warn!("WiFi connection to {} {} after {} polls", ssid, outcome, self.polls);
        let _ = writeln!(self.sink);
        let _ = writeln!(self.sink, "Gave up connecting to {}: {}", ssid, outcome);
        let _ = self.sink.flush();
        outcome
    }
}

/// Errors that end a connection attempt early.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectError {
    /// The stack refused the association request.
    Association(StackError),
    /// The stack reported `Connected` but had no address.
    NoAddress,
}

impl fmt::Display for ConnectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Association(e) => write!(f, "association request failed: {}", e),
            Self::NoAddress => write!(f, "connected without an assigned address"),
        }
    }
}

impl std::error::Error for ConnectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Association(e) => Some(e),
            Self::NoAddress => None,
        }
    }
}

impl From<StackError> for ConnectError {
    fn from(e: StackError) -> Self {
        Self::Association(e)
    }
}
