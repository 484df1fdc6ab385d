//! Autoplay ticker.
//!
//! A background task that emits a tick on a fixed period until shut down.
//! It never touches carousel state itself: the UI thread feeds every tick
//! into `InteractionController::autoplay_tick`, which is also where pause,
//! animation-lock and boundary-reversal decisions live. That keeps all state
//! arbitration on one thread even though the timer runs on the runtime.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

/// Events emitted by the autoplay service to the UI loop
#[derive(Debug, Clone)]
pub enum AutoplayEvent {
    /// Time to advance the carousel (subject to the controller's checks)
    Tick,
}

/// Periodic ticker driving automatic slide advance
pub struct AutoplayService {
    period: Duration,
    event_tx: mpsc::UnboundedSender<AutoplayEvent>,
}

impl AutoplayService {
    pub fn new(interval_ms: u64, event_tx: mpsc::UnboundedSender<AutoplayEvent>) -> Self {
        Self {
            period: Duration::from_millis(interval_ms),
            event_tx,
        }
    }

    /// Tick until the shutdown signal flips. The timer dies with this task,
    /// so no tick can be delivered after teardown.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        // Period 0 disables autoplay entirely
        if self.period.is_zero() {
            info!("Autoplay disabled (interval_ms = 0)");
            let _ = shutdown.changed().await;
            return;
        }

        info!("Autoplay started: period={}ms", self.period.as_millis());

        let mut interval = tokio::time::interval(self.period);
        // Skip the first tick (fires immediately)
        interval.tick().await;

        loop {
            tokio::select! {
                result = shutdown.changed() => {
                    if result.is_err() || *shutdown.borrow() {
                        debug!("Autoplay received shutdown signal");
                        break;
                    }
                }

                _ = interval.tick() => {
                    if self.event_tx.send(AutoplayEvent::Tick).is_err() {
                        warn!("Autoplay receiver dropped, stopping");
                        break;
                    }
                }
            }
        }

        info!("Autoplay stopped");
    }
}
