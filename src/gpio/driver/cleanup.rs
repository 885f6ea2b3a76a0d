use crate::{log_error, log_info};

use super::PinDriver;

impl PinDriver {
    /// Release the hardware. The driver is in mock mode afterwards.
    pub fn cleanup(&mut self) {
        let Some(mut backend) = self.backend.take() else {
            return;
        };

        match backend.release() {
            Ok(()) => log_info!("🔌 GPIO cleanup completed"),
            Err(e) => log_error!("Error during GPIO cleanup: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::gpio::{Polarity, RelayLevel, SimulatedPin};

    use super::*;

    #[test]
    fn test_cleanup_releases_backend_once() {
        let probe = SimulatedPin::new();
        let mut driver = PinDriver::new(17, Polarity::new(false), Some(Box::new(probe.clone())));
        driver.initialize();

        driver.cleanup();
        assert!(probe.is_released());
        assert!(driver.is_mock());

        // Second cleanup and later writes are harmless.
        driver.cleanup();
        assert!(driver.write(RelayLevel::Off));
    }
}
