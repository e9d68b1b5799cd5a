use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Duration, Interval, MissedTickBehavior};
use tracing::{debug, warn};

use match_core::{MatchState, Snapshot, tick};

use super::SyncMessage;
use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::events::{Event, Topic};

/// Timing of a [`DisplayMirror`].
#[derive(Debug, Clone)]
pub struct MirrorConfig {
    /// How often the local copy is ticked between snapshots.
    pub tick_interval: Duration,
    /// How often to ask for a fresh snapshot; `None` disables polling.
    pub resync_interval: Option<Duration>,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(match_core::EngineConfig::TICK_MS),
            resync_interval: Some(Duration::from_secs(3)),
        }
    }
}

/// Display-side replica of the operator's match.
///
/// Keeps the latest received snapshot and advances its state locally with
/// [`match_core::tick`] until the next snapshot replaces it. Whatever arrives
/// last wins; timestamps are not compared.
pub struct DisplayMirror {
    latest: watch::Receiver<Option<Snapshot>>,
    task: JoinHandle<()>,
}

impl DisplayMirror {
    /// Subscribes to the sync topic, greets the operator with `hello` and
    /// starts the local ticking task.
    ///
    /// Connecting before a match is loaded is fine; the mirror fills in once
    /// the first snapshot is broadcast.
    pub async fn connect(handle: RuntimeHandle, config: MirrorConfig) -> Result<Self> {
        // Subscribe first so the answer to `hello` cannot be missed.
        let sync_rx = handle.subscribe(Topic::Sync);
        let (latest_tx, latest_rx) = watch::channel(None);

        request(&handle, SyncMessage::display_hello()).await?;

        let task = tokio::spawn(run(handle, sync_rx, latest_tx, config));
        Ok(Self {
            latest: latest_rx,
            task,
        })
    }

    /// The mirrored snapshot, locally ticked.
    pub fn latest(&self) -> Option<Snapshot> {
        self.latest.borrow().clone()
    }

    pub fn state(&self) -> Option<MatchState> {
        self.latest.borrow().as_ref().map(|snapshot| snapshot.state.clone())
    }

    /// Watch channel for rendering loops.
    pub fn subscribe(&self) -> watch::Receiver<Option<Snapshot>> {
        self.latest.clone()
    }

    /// Waits until at least one snapshot has arrived.
    pub async fn wait_for_snapshot(&mut self) -> Result<Snapshot> {
        let snapshot = self
            .latest
            .wait_for(Option::is_some)
            .await
            .map_err(|_| RuntimeError::MirrorClosed)?;
        snapshot.clone().ok_or(RuntimeError::MirrorClosed)
    }
}

impl Drop for DisplayMirror {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Sends a display message upstream. No loaded match is not an error here.
async fn request(handle: &RuntimeHandle, message: SyncMessage) -> Result<()> {
    match handle.handle_sync(message).await {
        Ok(_) | Err(RuntimeError::MatchNotLoaded) => Ok(()),
        Err(error) => Err(error),
    }
}

async fn next_resync(resync: &mut Option<Interval>) {
    match resync {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending().await,
    }
}

fn new_interval(period: Duration) -> Interval {
    let mut interval = time::interval_at(time::Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

async fn run(
    handle: RuntimeHandle,
    mut sync_rx: broadcast::Receiver<Event>,
    latest_tx: watch::Sender<Option<Snapshot>>,
    config: MirrorConfig,
) {
    let mut ticker = new_interval(config.tick_interval);
    let mut resync = config.resync_interval.map(new_interval);

    loop {
        tokio::select! {
            event = sync_rx.recv() => match event {
                Ok(Event::Sync(SyncMessage::State(snapshot))) => {
                    latest_tx.send_replace(Some(snapshot));
                }
                Ok(_) => {}
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(target: "runtime::mirror", skipped, "Mirror lagged, requesting state");
                    if let Err(error) = request(&handle, SyncMessage::display_request()).await {
                        warn!(target: "runtime::mirror", %error, "State request failed");
                    }
                }
                Err(broadcast::error::RecvError::Closed) => break,
            },
            _ = ticker.tick() => {
                latest_tx.send_if_modified(|latest| {
                    let Some(snapshot) = latest.as_mut() else {
                        return false;
                    };
                    let next = tick(&snapshot.state);
                    let changed = next != snapshot.state;
                    snapshot.state = next;
                    changed
                });
            }
            _ = next_resync(&mut resync) => {
                if let Err(error) = request(&handle, SyncMessage::display_request()).await {
                    warn!(target: "runtime::mirror", %error, "State request failed");
                    break;
                }
            }
        }
    }
    debug!(target: "runtime::mirror", "Mirror stopped");
}
