// src/gpio/driver/mod.rs

mod new;
mod from_config;
mod initialize;
mod write;
mod read;
mod cleanup;

use crate::gpio::{PinBackend, Polarity};

/// Relay pin driver. A driver without a backend is in mock mode: every
/// operation is logged and reports success, nothing touches hardware.
#[derive(Debug)]
pub struct PinDriver {
    pin: u8,
    polarity: Polarity,
    backend: Option<Box<dyn PinBackend>>,
}

impl PinDriver {
    pub fn pin(&self) -> u8 {
        self.pin
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    pub fn is_mock(&self) -> bool {
        self.backend.is_none()
    }
}
