use crate::gpio::{PinBackend, Polarity};

use super::PinDriver;

impl PinDriver {
    /// `None` starts the driver in mock mode.
    pub fn new(pin: u8, polarity: Polarity, backend: Option<Box<dyn PinBackend>>) -> Self {
        Self {
            pin,
            polarity,
            backend,
        }
    }

    pub fn mock(pin: u8, polarity: Polarity) -> Self {
        Self::new(pin, polarity, None)
    }
}
