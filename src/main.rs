//! Firmware entry point: join WiFi, then hand over to the application.
//!
//! Credentials are baked in at compile time:
//!
//! ```text
//! WIFI_SSID="MyNetwork" WIFI_PASSWORD="secret" cargo espflash flash --features esp32 --release
//! ```

#[cfg(feature = "esp32")]
fn run() -> Result<(), Box<dyn std::error::Error>> {
    use esp_idf_hal::peripherals::Peripherals;
    use esp_idf_svc::eventloop::EspSystemEventLoop;
    use esp_idf_svc::nvs::EspDefaultNvsPartition;
    use std::time::Duration;
    use wifi_connector::wifi::EspWirelessStack;
    use wifi_connector::{Connector, ConnectorConfig, WifiConfig, WirelessStack};

    let wifi = WifiConfig::from_build_env()?;

    let peripherals = Peripherals::take()?;
    let sysloop = EspSystemEventLoop::take()?;
    let nvs = EspDefaultNvsPartition::take()?;
    let stack = EspWirelessStack::new(peripherals.modem, sysloop, Some(nvs))?;

    // Serial console is the diagnostic sink
    let mut connector = Connector::new(stack, std::io::stdout(), ConnectorConfig::default());
    let ip = connector.establish_connection(&wifi)?;
    log::info!("Network ready at {}", ip);

    loop {
        std::thread::sleep(Duration::from_secs(10));
        log::info!("Heartbeat, WiFi {}", connector.stack().status());
    }
}

#[cfg(feature = "esp32")]
fn main() {
    // Link ESP-IDF patches (must be first!)
    esp_idf_sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    if let Err(e) = run() {
        log::error!("WiFi bring-up failed: {}", e);
        // Give the serial monitor time to show the error before restarting
        std::thread::sleep(std::time::Duration::from_secs(2));
        std::process::exit(1);
    }
}

#[cfg(not(feature = "esp32"))]
fn main() {
    println!("This binary requires the 'esp32' feature.");
    println!("Use 'cargo run --bin host-connect' to try the connector on the host.");
}
