use crate::{
    error::{RelayError, Result},
    gpio::PinLevel,
};

use super::PinDriver;

impl PinDriver {
    /// `GpioUnavailable` in mock mode, `Gpio` on a read fault.
    pub fn read(&self) -> Result<PinLevel> {
        match self.backend.as_ref() {
            Some(backend) => backend.read(),
            None => Err(RelayError::GpioUnavailable(format!("pin {} is in mock mode", self.pin))),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::gpio::{Polarity, SimulatedPin};

    use super::*;

    #[test]
    fn test_mock_read_is_unavailable() {
        let driver = PinDriver::mock(17, Polarity::new(false));
        assert!(matches!(driver.read(), Err(RelayError::GpioUnavailable(_))));
    }

    #[test]
    fn test_read_fault_is_gpio_error() {
        let probe = SimulatedPin::new();
        let mut driver = PinDriver::new(17, Polarity::new(false), Some(Box::new(probe.clone())));
        driver.initialize();

        probe.set_fail_reads(true);
        assert!(matches!(driver.read(), Err(RelayError::Gpio(_))));
    }
}
