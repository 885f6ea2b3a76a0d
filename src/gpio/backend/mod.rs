// src/gpio/backend/mod.rs

#[cfg(feature = "rppal")]
mod rppal_pin;
mod simulated;

#[cfg(feature = "rppal")]
pub use rppal_pin::RppalPin;
pub use simulated::{PinWrite, SimulatedPin};

use std::fmt::Debug;

use crate::{
    config::{BackendKind, RelayConfig},
    error::{RelayError, Result},
    gpio::PinLevel,
};

/// Raw access to one output pin. Implementations report faults as errors and never panic.
pub trait PinBackend: Send + Debug {
    fn name(&self) -> &str;
    fn setup_output(&mut self, pin: u8, initial: PinLevel) -> Result<()>;
    fn write(&mut self, level: PinLevel) -> Result<()>;
    fn read(&self) -> Result<PinLevel>;
    fn release(&mut self) -> Result<()>;
}

/// Open the backend the config asks for. `GpioUnavailable` means run in mock mode.
pub fn open_backend(config: &RelayConfig) -> Result<Box<dyn PinBackend>> {
    if !config.gpio_enabled {
        return Err(RelayError::GpioUnavailable("disabled by GPIO_ENABLED".to_string()));
    }

    match config.backend {
        BackendKind::Simulated => Ok(Box::new(SimulatedPin::new())),
        BackendKind::Rppal => open_rppal(),
    }
}

#[cfg(feature = "rppal")]
fn open_rppal() -> Result<Box<dyn PinBackend>> {
    Ok(Box::new(RppalPin::open()?))
}

#[cfg(not(feature = "rppal"))]
fn open_rppal() -> Result<Box<dyn PinBackend>> {
    Err(RelayError::GpioUnavailable("built without the rppal feature".to_string()))
}
