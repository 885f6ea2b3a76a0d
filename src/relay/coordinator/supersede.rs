use tokio::time::Instant;

use crate::{log_info, log_warn};

use super::{BlinkOperation, RelayCoordinator};

impl RelayCoordinator {
    /// Cancel the blink in `slot` and wait until `deadline` for it to stop.
    ///
    /// The operation stays in `slot` until the wait is over. On timeout the
    /// caller proceeds anyway and the old task is detached; its final OFF
    /// write may then land after the caller's write.
    pub(super) async fn supersede(&self, slot: &mut Option<BlinkOperation>, deadline: Instant, reason: &str) {
        let Some(op) = slot.as_mut() else {
            return;
        };

        if !op.is_finished() {
            log_info!("⏹ Cancelling {}ms blink for {}", op.duration_ms, reason);

            if !op.cancel_and_wait(deadline).await {
                log_warn!(
                    "Blink on pin {} did not stop in time, proceeding with {}",
                    self.relay_pin,
                    reason
                );
            }
        }

        *slot = None;
    }
}
