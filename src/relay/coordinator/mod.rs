// src/relay/coordinator/mod.rs

mod new;
mod supersede;
mod turn_on;
mod turn_off;
mod blink;
mod is_blinking;
mod status;
mod health;
mod shutdown;

use std::sync::atomic::AtomicBool;

use tokio::{sync::MutexGuard, time::Instant};

use crate::{
    gpio::{PinDriver, Polarity},
    log_warn,
};

use super::blink::{BlinkOperation, SharedDriver};

/// Single owner of the relay pin and of the in-flight blink.
///
/// `active_blink` doubles as the command lock: every state-changing call holds
/// it from cancellation through its own pin write, so two commands never
/// interleave. The driver sits behind its own short-lived lock because the
/// blink task writes through it while the command lock is free. Foreground
/// callers only wait for that lock until their deadline.
#[derive(Debug)]
pub struct RelayCoordinator {
    relay_pin: u8,
    polarity: Polarity,
    gpio_enabled: bool,
    gpio_available: AtomicBool,
    driver: SharedDriver,
    active_blink: tokio::sync::Mutex<Option<BlinkOperation>>,
    shut_down: AtomicBool,
}

impl RelayCoordinator {
    pub fn relay_pin(&self) -> u8 {
        self.relay_pin
    }

    pub fn active_high(&self) -> bool {
        self.polarity.active_high
    }

    /// `None` if the driver is still held (a wedged blink write) at `deadline`.
    async fn lock_driver(&self, deadline: Instant, reason: &str) -> Option<MutexGuard<'_, PinDriver>> {
        match tokio::time::timeout_at(deadline, self.driver.lock()).await {
            Ok(driver) => Some(driver),
            Err(_) => {
                log_warn!("Pin {} still busy, giving up on {}", self.relay_pin, reason);
                None
            }
        }
    }
}
