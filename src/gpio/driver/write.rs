use crate::{
    gpio::RelayLevel,
    log_error, log_info,
};

use super::PinDriver;

impl PinDriver {
    /// Returns false on a driver fault; never panics.
    pub fn write(&mut self, level: RelayLevel) -> bool {
        let pin_level = self.polarity.pin_level(level);

        let Some(backend) = self.backend.as_mut() else {
            log_info!("🔌 Mock: Relay {}", level);
            return true;
        };

        match backend.write(pin_level) {
            Ok(()) => {
                match backend.read() {
                    Ok(actual) => log_info!("🔌 Relay {} (pin {} = {})", level, self.pin, actual),
                    Err(_) => log_info!("🔌 Relay {} (pin {} set {})", level, self.pin, pin_level),
                }
                true
            }
            Err(e) => {
                log_error!("Failed to set relay {} on pin {}: {}", level, self.pin, e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::gpio::{PinLevel, Polarity, SimulatedPin};

    use super::*;

    #[test]
    fn test_write_then_read_round_trips_for_both_polarities() {
        for active_high in [true, false] {
            let polarity = Polarity::new(active_high);
            let mut driver = PinDriver::new(17, polarity, Some(Box::new(SimulatedPin::new())));
            driver.initialize();

            for level in [RelayLevel::On, RelayLevel::Off, RelayLevel::On] {
                assert!(driver.write(level));
                let read = driver.read().unwrap();
                assert_eq!(polarity.relay_level(read), level);
            }
        }
    }

    #[test]
    fn test_active_low_on_drives_pin_low() {
        let probe = SimulatedPin::new();
        let mut driver = PinDriver::new(17, Polarity::new(false), Some(Box::new(probe.clone())));
        driver.initialize();

        assert!(driver.write(RelayLevel::On));
        assert_eq!(probe.level(), Some(PinLevel::Low));
    }

    #[test]
    fn test_write_fault_returns_false() {
        let probe = SimulatedPin::new();
        let mut driver = PinDriver::new(17, Polarity::new(true), Some(Box::new(probe.clone())));
        driver.initialize();

        probe.set_fail_writes(true);
        assert!(!driver.write(RelayLevel::On));
        // A write fault does not downgrade the driver.
        assert!(!driver.is_mock());
    }

    #[test]
    fn test_mock_write_succeeds() {
        let mut driver = PinDriver::mock(17, Polarity::new(false));
        driver.initialize();
        assert!(driver.write(RelayLevel::On));
        assert!(driver.write(RelayLevel::Off));
    }
}
