// src/gpio/backend/rppal_pin.rs
//! Raspberry Pi GPIO through rppal (BCM numbering)

use std::fmt;

use rppal::gpio::{Gpio, OutputPin};

use crate::{
    error::{RelayError, Result},
    gpio::PinLevel,
};

use super::PinBackend;

pub struct RppalPin {
    gpio: Gpio,
    pin: Option<OutputPin>,
}

impl RppalPin {
    pub fn open() -> Result<Self> {
        let gpio = Gpio::new()?;
        Ok(Self { gpio, pin: None })
    }

    fn output(&mut self) -> Result<&mut OutputPin> {
        self.pin
            .as_mut()
            .ok_or_else(|| RelayError::Gpio("pin not configured as output".to_string()))
    }
}

impl fmt::Debug for RppalPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RppalPin")
            .field("pin", &self.pin.as_ref().map(|p| p.pin()))
            .finish()
    }
}

impl PinBackend for RppalPin {
    fn name(&self) -> &str {
        "rppal"
    }

    fn setup_output(&mut self, pin: u8, initial: PinLevel) -> Result<()> {
        let pin = self.gpio.get(pin)?;
        let output = match initial {
            PinLevel::High => pin.into_output_high(),
            PinLevel::Low => pin.into_output_low(),
        };
        self.pin = Some(output);
        Ok(())
    }

    fn write(&mut self, level: PinLevel) -> Result<()> {
        let output = self.output()?;
        match level {
            PinLevel::High => output.set_high(),
            PinLevel::Low => output.set_low(),
        }
        Ok(())
    }

    fn read(&self) -> Result<PinLevel> {
        let output = self
            .pin
            .as_ref()
            .ok_or_else(|| RelayError::Gpio("pin not configured as output".to_string()))?;
        Ok(if output.is_set_high() { PinLevel::High } else { PinLevel::Low })
    }

    fn release(&mut self) -> Result<()> {
        // Dropping the OutputPin restores the pin's previous mode.
        self.pin.take();
        Ok(())
    }
}
