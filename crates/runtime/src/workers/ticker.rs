//! Fixed-rate driver for the engine's tick function.

use tokio::sync::mpsc;
use tokio::time::{self, Duration, MissedTickBehavior};
use tracing::debug;

use super::Command;

/// Sends [`Command::Tick`] to the simulation worker on a fixed interval.
///
/// The ticker never touches the state itself, so ticks are serialized with
/// actions by the worker's command queue.
pub struct TickerWorker {
    command_tx: mpsc::Sender<Command>,
    period: Duration,
}

impl TickerWorker {
    pub fn new(command_tx: mpsc::Sender<Command>, period: Duration) -> Self {
        Self { command_tx, period }
    }

    /// Runs until the simulation worker goes away.
    pub async fn run(self) {
        let mut interval = time::interval(self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick of an interval completes immediately.
        interval.tick().await;

        loop {
            interval.tick().await;
            if self.command_tx.send(Command::Tick).await.is_err() {
                debug!(target: "runtime::ticker", "Simulation worker gone, ticker stopping");
                break;
            }
        }
    }
}
