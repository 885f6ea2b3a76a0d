use super::RelayCoordinator;

impl RelayCoordinator {
    pub async fn is_blinking(&self) -> bool {
        self.active_blink
            .lock()
            .await
            .as_ref()
            .is_some_and(|op| !op.is_finished())
    }
}
