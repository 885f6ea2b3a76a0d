use tokio::time::Instant;

use crate::{gpio::RelayLevel, relay::SUPERSEDE_TIMEOUT};

use super::RelayCoordinator;

impl RelayCoordinator {
    pub async fn turn_on(&self) -> bool {
        let deadline = Instant::now() + SUPERSEDE_TIMEOUT;
        let mut active = self.active_blink.lock().await;
        self.supersede(&mut active, deadline, "relay on").await;

        match self.lock_driver(deadline, "relay on").await {
            Some(mut driver) => driver.write(RelayLevel::On),
            None => false,
        }
    }
}
