use serde_json::Value;
use tokio::time::Instant;

use crate::{
    log_debug,
    relay::{clamp_duration, resolve_duration, SUPERSEDE_TIMEOUT},
};

use super::{BlinkOperation, RelayCoordinator};

impl RelayCoordinator {
    /// Start a blink, superseding any running one. Returns as soon as the new
    /// blink is spawned, with the resolved duration.
    pub async fn blink(&self, duration_ms: i64) -> u64 {
        self.start_blink(clamp_duration(duration_ms)).await
    }

    /// Same as `blink`, for an untrusted `duration_ms` value from a request.
    pub async fn blink_from_input(&self, raw: Option<&Value>) -> u64 {
        self.start_blink(resolve_duration(raw)).await
    }

    async fn start_blink(&self, duration_ms: u64) -> u64 {
        let deadline = Instant::now() + SUPERSEDE_TIMEOUT;
        let mut active = self.active_blink.lock().await;
        self.supersede(&mut active, deadline, "new blink").await;

        log_debug!("Spawning blink task for pin {} ({}ms)", self.relay_pin, duration_ms);
        *active = Some(BlinkOperation::spawn(self.driver.clone(), duration_ms));

        duration_ms
    }
}
