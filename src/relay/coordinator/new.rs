use std::sync::{atomic::AtomicBool, Arc};

use crate::{
    config::RelayConfig,
    gpio::{PinBackend, PinDriver, Polarity},
};

use super::RelayCoordinator;

impl RelayCoordinator {
    /// Build around an explicit backend; `None` runs in mock mode.
    /// The pin is initialized to OFF here.
    pub fn new(config: &RelayConfig, backend: Option<Box<dyn PinBackend>>) -> Self {
        let driver = PinDriver::new(config.relay_pin, Polarity::new(config.active_high), backend);
        Self::with_driver(config, driver)
    }

    /// Open whatever backend the config names, falling back to mock mode.
    pub fn from_config(config: &RelayConfig) -> Self {
        Self::with_driver(config, PinDriver::from_config(config))
    }

    fn with_driver(config: &RelayConfig, mut driver: PinDriver) -> Self {
        driver.initialize();

        Self {
            relay_pin: driver.pin(),
            polarity: driver.polarity(),
            gpio_enabled: config.gpio_enabled,
            gpio_available: AtomicBool::new(!driver.is_mock()),
            driver: Arc::new(tokio::sync::Mutex::new(driver)),
            active_blink: tokio::sync::Mutex::new(None),
            shut_down: AtomicBool::new(false),
        }
    }
}
