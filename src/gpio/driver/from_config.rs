use crate::{
    config::RelayConfig,
    gpio::{open_backend, Polarity},
    log_warn,
};

use super::PinDriver;

impl PinDriver {
    /// Open the configured backend, falling back to mock mode when it is
    /// missing or disabled. Call `initialize` afterwards.
    pub fn from_config(config: &RelayConfig) -> Self {
        let polarity = Polarity::new(config.active_high);

        let backend = match open_backend(config) {
            Ok(backend) => Some(backend),
            Err(e) => {
                log_warn!(
                    "🔌 GPIO backend '{}' not available, running in mock mode: {}",
                    config.backend.as_str(),
                    e
                );
                None
            }
        };

        Self::new(config.relay_pin, polarity, backend)
    }
}
