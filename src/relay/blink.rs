// src/relay/blink.rs

use std::{sync::Arc, time::Duration};

use tokio::{
    sync::{
        oneshot::{self, error::TryRecvError},
        Mutex,
    },
    task::JoinHandle,
    time::Instant,
};

use crate::{
    gpio::{PinDriver, RelayLevel},
    log_error, log_info,
};

/// Driver handle shared by the coordinator and its blink task. The lock is
/// async so a caller can give up on it after a deadline.
pub(super) type SharedDriver = Arc<Mutex<PinDriver>>;

/// The one timed ON→OFF transition currently in flight
#[derive(Debug)]
pub(super) struct BlinkOperation {
    pub duration_ms: u64,
    cancel: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

impl BlinkOperation {
    pub fn spawn(driver: SharedDriver, duration_ms: u64) -> Self {
        let (cancel_tx, cancel_rx) = oneshot::channel();
        let handle = tokio::spawn(run_blink(driver, duration_ms, cancel_rx));

        Self {
            duration_ms,
            cancel: Some(cancel_tx),
            handle,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Signal cancellation and wait until `deadline` for the task to exit.
    /// Returns false if it was still running at the deadline.
    ///
    /// Borrows rather than consumes, so a caller dropped mid-wait leaves the
    /// operation where the next command will wait for it again.
    pub async fn cancel_and_wait(&mut self, deadline: Instant) -> bool {
        if let Some(cancel) = self.cancel.take() {
            let _ = cancel.send(());
        }

        match tokio::time::timeout_at(deadline, &mut self.handle).await {
            Ok(Ok(())) => true,
            Ok(Err(e)) => {
                log_error!("Blink task ended abnormally: {}", e);
                true
            }
            Err(_) => false,
        }
    }
}

async fn write(driver: &SharedDriver, level: RelayLevel) -> bool {
    driver.lock().await.write(level)
}

/// ON, hold until the duration elapses or cancellation arrives, then OFF.
/// The OFF write runs on every path. A dropped sender counts as cancellation.
async fn run_blink(driver: SharedDriver, duration_ms: u64, mut cancel: oneshot::Receiver<()>) {
    log_info!("💡 Starting blink for {}ms", duration_ms);

    if !matches!(cancel.try_recv(), Err(TryRecvError::Empty)) {
        log_info!("💡 Blink cancelled before it started");
    } else if write(&driver, RelayLevel::On).await {
        tokio::select! {
            _ = tokio::time::sleep(Duration::from_millis(duration_ms)) => {
                log_info!("💡 Blink duration completed");
            }
            _ = &mut cancel => {
                log_info!("💡 Blink interrupted by stop signal");
            }
        }
    }

    write(&driver, RelayLevel::Off).await;
    log_info!("💡 Blink finished");
}

#[cfg(test)]
mod tests {
    use crate::gpio::{PinLevel, Polarity, SimulatedPin};

    use super::*;

    fn driver_with_probe(active_high: bool) -> (SharedDriver, SimulatedPin) {
        let probe = SimulatedPin::new();
        let mut driver = PinDriver::new(17, Polarity::new(active_high), Some(Box::new(probe.clone())));
        driver.initialize();
        (Arc::new(Mutex::new(driver)), probe)
    }

    #[tokio::test(start_paused = true)]
    async fn test_blink_runs_to_completion() {
        let (driver, probe) = driver_with_probe(true);

        let op = BlinkOperation::spawn(driver, 200);
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(probe.level(), Some(PinLevel::High));

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(op.is_finished());
        assert_eq!(probe.levels(), vec![PinLevel::Low, PinLevel::High, PinLevel::Low]);

        let writes = probe.writes();
        let held = writes[2].at - writes[1].at;
        assert!(held >= Duration::from_millis(200) && held < Duration::from_millis(210));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_still_writes_off() {
        let (driver, probe) = driver_with_probe(false);

        let mut op = BlinkOperation::spawn(driver, 10_000);
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(probe.level(), Some(PinLevel::Low));

        assert!(op.cancel_and_wait(Instant::now() + Duration::from_secs(1)).await);
        assert_eq!(probe.level(), Some(PinLevel::High));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_before_start_skips_on() {
        let (driver, probe) = driver_with_probe(true);

        let mut op = BlinkOperation::spawn(driver, 500);
        assert!(op.cancel_and_wait(Instant::now() + Duration::from_secs(1)).await);

        assert_eq!(probe.levels(), vec![PinLevel::Low, PinLevel::Low]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_on_write_still_attempts_off() {
        let (driver, probe) = driver_with_probe(true);
        probe.set_fail_writes(true);

        let op = BlinkOperation::spawn(driver, 1_000);
        tokio::time::sleep(Duration::from_millis(10)).await;

        // ON failed so there is no hold; OFF was attempted and the task is done.
        assert!(op.is_finished());
        assert_eq!(probe.levels(), vec![PinLevel::Low]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_wait_gives_up_at_deadline_on_stuck_write() {
        let (driver, probe) = driver_with_probe(true);
        probe.set_write_delay(Duration::from_millis(1_500));

        let mut op = BlinkOperation::spawn(driver, 50);
        tokio::time::sleep(Duration::from_millis(50)).await;

        let start = Instant::now();
        assert!(!op.cancel_and_wait(start + Duration::from_millis(300)).await);
        assert!(start.elapsed() < Duration::from_millis(800));
        assert!(!op.is_finished());
    }
}
