use std::sync::atomic::Ordering;

use tokio::time::Instant;

use crate::{gpio::RelayLevel, log_debug, log_error, log_info, log_warn, relay::SHUTDOWN_TIMEOUT};

use super::RelayCoordinator;

impl RelayCoordinator {
    /// Stop any blink, force the relay OFF and release the pin. Only the first
    /// call does anything, and it returns within the shutdown bound.
    pub async fn shutdown(&self) {
        if self.shut_down.swap(true, Ordering::SeqCst) {
            log_debug!("Shutdown already ran for pin {}", self.relay_pin);
            return;
        }

        log_info!("🧹 Cleaning up relay on pin {}...", self.relay_pin);

        let deadline = Instant::now() + SHUTDOWN_TIMEOUT;
        let mut active = self.active_blink.lock().await;
        self.supersede(&mut active, deadline, "shutdown").await;

        let Some(mut driver) = self.lock_driver(deadline, "shutdown").await else {
            log_error!("Relay on pin {} left in an unknown state at shutdown", self.relay_pin);
            return;
        };

        if !driver.write(RelayLevel::Off) {
            log_warn!("Could not force relay OFF on pin {} during shutdown", self.relay_pin);
        }
        driver.cleanup();
        self.gpio_available.store(false, Ordering::SeqCst);
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down.load(Ordering::SeqCst)
    }
}
