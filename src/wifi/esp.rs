//! ESP-IDF wireless stack.
//!
//! Wraps the non-blocking [`EspWifi`] driver. Association is only requested
//! here; the connector observes progress through `status()`. A system event
//! subscription re-issues the connect request whenever the station drops,
//! since ESP-IDF does not retry failed associations on its own.

use super::tracker::{AssociationTracker, DriverState};
use super::{LinkStatus, StackError, WirelessStack};
use crate::config::WifiConfig;
use esp_idf_hal::modem::Modem;
use esp_idf_svc::eventloop::{EspSubscription, EspSystemEventLoop, System};
use esp_idf_svc::nvs::EspDefaultNvsPartition;
use esp_idf_svc::sys::{esp, esp_wifi_connect, EspError};
use esp_idf_svc::wifi::{AuthMethod, ClientConfiguration, Configuration, EspWifi, WifiEvent};
use log::{debug, info, warn};
use std::net::IpAddr;
use std::sync::Arc;

/// [`WirelessStack`] backed by the ESP-IDF WiFi driver in station mode.
pub struct EspWirelessStack<'a> {
    wifi: EspWifi<'a>,
    tracker: Arc<AssociationTracker>,
    /// Keeps the reconnect handler registered.
    _events: EspSubscription<'static, System>,
}

impl<'a> EspWirelessStack<'a> {
    /// Create the driver. `nvs` lets ESP-IDF cache PHY calibration data.
    pub fn new(
        modem: Modem,
        sysloop: EspSystemEventLoop,
        nvs: Option<EspDefaultNvsPartition>,
    ) -> Result<Self, EspError> {
        let wifi = EspWifi::new(modem, sysloop.clone(), nvs)?;
        let tracker = Arc::new(AssociationTracker::new());

        let events_tracker = tracker.clone();
        let events = sysloop.subscribe::<WifiEvent, _>(move |event| match event {
            WifiEvent::StaConnected { .. } => events_tracker.on_connected(),
            WifiEvent::StaDisconnected { .. } => {
                if events_tracker.on_disconnected() {
                    debug!(
                        "WiFi station dropped, reconnect attempt {}",
                        events_tracker.reconnects()
                    );
                    // The driver handle lives on the polling thread; the raw
                    // call is safe once the driver is started
                    if let Err(e) = esp!(unsafe { esp_wifi_connect() }) {
                        warn!("WiFi reconnect request failed: {:?}", e);
                    }
                }
            }
            _ => {}
        })?;

        Ok(Self {
            wifi,
            tracker,
            _events: events,
        })
    }

    /// Connect requests re-issued after the station dropped.
    pub fn reconnects(&self) -> u32 {
        self.tracker.reconnects()
    }

    fn client_configuration(config: &WifiConfig) -> Result<Configuration, StackError> {
        let auth_method = if config.is_open() {
            AuthMethod::None
        } else {
            AuthMethod::WPA2Personal
        };

        Ok(Configuration::Client(ClientConfiguration {
            ssid: config
                .ssid
                .as_str()
                .try_into()
                .map_err(|_| StackError::InvalidSsid)?,
            password: config
                .password
                .as_str()
                .try_into()
                .map_err(|_| StackError::InvalidPassword)?,
            auth_method,
            ..Default::default()
        }))
    }
}

impl WirelessStack for EspWirelessStack<'_> {
    fn begin_association(&mut self, config: &WifiConfig) -> Result<(), StackError> {
        let client = Self::client_configuration(config)?;
        self.wifi.set_configuration(&client)?;

        if !self.wifi.is_started()? {
            self.wifi.start()?;
        }

        // Returns immediately; the driver associates in the background
        self.tracker.on_requested();
        self.wifi.connect()?;
        info!("WiFi association requested for {}", config.ssid);
        Ok(())
    }

    fn status(&self) -> LinkStatus {
        let associated = match self.wifi.is_connected() {
            Ok(associated) => Some(associated),
            Err(e) => {
                warn!("WiFi status query failed: {:?}", e);
                None
            }
        };

        self.tracker.status(DriverState {
            started: self.wifi.is_started().unwrap_or(false),
            associated,
            netif_up: self.wifi.is_up().unwrap_or(false),
        })
    }

    fn assigned_address(&self) -> Option<IpAddr> {
        self.wifi
            .sta_netif()
            .get_ip_info()
            .ok()
            .map(|info| IpAddr::V4(info.ip))
    }
}
