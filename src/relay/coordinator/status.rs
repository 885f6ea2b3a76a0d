use std::sync::atomic::Ordering;

use tokio::time::Instant;

use crate::relay::{RelayStatus, SUPERSEDE_TIMEOUT};

use super::RelayCoordinator;

impl RelayCoordinator {
    /// Does not wait for in-flight commands. A driver held past the
    /// supersede bound reports as an error.
    pub async fn status(&self) -> RelayStatus {
        if !self.gpio_available.load(Ordering::SeqCst) {
            return RelayStatus::Mock {
                relay_pin: self.relay_pin,
            };
        }

        let Some(driver) = self.lock_driver(Instant::now() + SUPERSEDE_TIMEOUT, "status").await else {
            return RelayStatus::Error {
                relay_pin: self.relay_pin,
                error: "pin busy".to_string(),
            };
        };

        if driver.is_mock() {
            return RelayStatus::Mock {
                relay_pin: self.relay_pin,
            };
        }

        match driver.read() {
            Ok(pin_state) => RelayStatus::Ok {
                relay_pin: self.relay_pin,
                pin_state,
                relay_on: self.polarity.relay_level(pin_state).is_on(),
                active_high: self.polarity.active_high,
            },
            Err(e) => RelayStatus::Error {
                relay_pin: self.relay_pin,
                error: e.to_string(),
            },
        }
    }
}
