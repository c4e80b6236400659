use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;

use crate::core::raw_msg::RawMsg;

/// The repeating one-second countdown timer.
///
/// Spawned by `StartTicker`, it delivers `RawMsg::CountdownTick` into the
/// runtime once per period until cancelled. The command executor owns at
/// most one of these at a time; dropping the handle cancels the task, so a
/// torn-down session can never receive a late tick from a leaked timer.
#[derive(Debug)]
pub struct CountdownTicker {
    token: CancellationToken,
    task: tokio::task::JoinHandle<()>,
}

impl CountdownTicker {
    /// Spawn the ticker task. The first tick fires one full period after the
    /// spawn, matching a countdown that starts at its full duration.
    pub fn spawn(period: Duration, raw_tx: UnboundedSender<RawMsg>) -> Self {
        let token = CancellationToken::new();
        let child_token = token.clone();
        let task = tokio::spawn(async move {
            let start = tokio::time::Instant::now() + period;
            let mut interval = tokio::time::interval_at(start, period);
            loop {
                tokio::select! {
                    _ = child_token.cancelled() => {
                        log::debug!("countdown ticker cancelled");
                        break;
                    }
                    _ = interval.tick() => {
                        if raw_tx.send(RawMsg::CountdownTick).is_err() {
                            // Receiver gone; the runtime is shutting down.
                            break;
                        }
                    }
                }
            }
        });
        Self { token, task }
    }

    /// Stop the ticker. Idempotent; already-delivered ticks are discarded by
    /// the update function.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for CountdownTicker {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
