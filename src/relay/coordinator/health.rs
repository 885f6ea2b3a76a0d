use std::sync::atomic::Ordering;

use crate::relay::HealthReport;

use super::RelayCoordinator;

impl RelayCoordinator {
    /// Never touches the driver, so it answers even while a write is stuck.
    pub fn health(&self) -> HealthReport {
        HealthReport {
            gpio_available: self.gpio_available.load(Ordering::SeqCst),
            gpio_enabled: self.gpio_enabled,
            relay_pin: self.relay_pin,
            active_high: self.polarity.active_high,
        }
    }
}
