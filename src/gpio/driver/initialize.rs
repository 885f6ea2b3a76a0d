use crate::{
    gpio::RelayLevel,
    log_error, log_info,
};

use super::PinDriver;

impl PinDriver {
    /// Configure the pin as an output, driven to the logical OFF level.
    /// Any failure downgrades the driver to mock mode for good.
    pub fn initialize(&mut self) {
        let off = self.polarity.pin_level(RelayLevel::Off);

        let Some(backend) = self.backend.as_mut() else {
            log_info!("🔌 GPIO in mock mode for pin {}", self.pin);
            return;
        };

        match backend.setup_output(self.pin, off) {
            Ok(()) => {
                log_info!(
                    "🔌 Initialized BCM pin {} via {}, active_high={}",
                    self.pin,
                    backend.name(),
                    self.polarity.active_high
                );
                log_info!("🔌 Relay set to OFF (pin state: {})", off);
            }
            Err(e) => {
                log_error!("Failed to initialize GPIO pin {}: {}", self.pin, e);
                self.backend = None;
            }
        }
    }
}
