//! Run the connector on the host against a simulated access point.
//!
//! Usage:
//!   cargo run --bin host-connect -- settings.json
//!   WIFI_SSID="MyNetwork" WIFI_PASSWORD="secret" cargo run --bin host-connect
//!
//! The simulated access point accepts the configured credentials unless
//! `SIM_AP_PASSWORD` says otherwise, which is handy for watching the
//! connector wait on a rejected key. Ctrl+C cancels the wait.

#[cfg(not(target_os = "espidf"))]
mod host {
    use log::{error, info};
    use std::net::{IpAddr, Ipv4Addr};
    use std::path::Path;
    use std::time::Duration;
    use tokio_util::sync::CancellationToken;
    use wifi_connector::config::ConnectorSettings;
    use wifi_connector::wifi::{SimulatedAccessPoint, SimulatedStack};
    use wifi_connector::{ConfigError, ConnectOutcome, Connector, ConnectorConfig, WifiConfig};

    const SIMULATED_ADDRESS: IpAddr = IpAddr::V4(Ipv4Addr::new(192, 168, 4, 2));

    fn load_settings() -> Result<ConnectorSettings, ConfigError> {
        match std::env::args().nth(1) {
            Some(path) => ConnectorSettings::from_json_file(Path::new(&path)),
            None => Ok(ConnectorSettings {
                wifi: WifiConfig::from_build_env()?,
                connector: ConnectorConfig::default().with_timeout(Duration::from_secs(30)),
            }),
        }
    }

    #[tokio::main(flavor = "current_thread")]
    pub async fn main() {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

        let settings = match load_settings() {
            Ok(settings) => settings,
            Err(e) => {
                error!("Cannot load WiFi settings: {}", e);
                std::process::exit(2);
            }
        };

        if let Err(e) = settings.wifi.validate() {
            // A real stack would likely reject these; the simulation does not care
            log::warn!("Credentials look invalid: {}", e);
        }

        let ap_password =
            std::env::var("SIM_AP_PASSWORD").unwrap_or_else(|_| settings.wifi.password.clone());
        let ap =
            SimulatedAccessPoint::new(settings.wifi.ssid.clone(), ap_password, SIMULATED_ADDRESS);
        info!("Simulating access point {}", ap.ssid());

        let cancel = CancellationToken::new();
        let ctrl_c_cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Ctrl+C received, cancelling");
                ctrl_c_cancel.cancel();
            }
        });

        let mut connector = Connector::new(
            SimulatedStack::new(vec![ap]),
            std::io::stdout(),
            settings.connector,
        );

        match connector.connect_async(&settings.wifi, &cancel).await {
            Ok(ConnectOutcome::Connected(ip)) => info!("Network ready at {}", ip),
            Ok(outcome) => {
                error!("WiFi not connected: {}", outcome);
                std::process::exit(1);
            }
            Err(e) => {
                error!("WiFi connection failed: {}", e);
                std::process::exit(1);
            }
        }
    }
}

#[cfg(not(target_os = "espidf"))]
fn main() {
    host::main();
}

#[cfg(target_os = "espidf")]
fn main() {
    println!("host-connect runs on the host only.");
}
