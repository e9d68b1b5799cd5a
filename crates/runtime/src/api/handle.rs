//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! driving the match or streaming events from specific topics.
use tokio::sync::{broadcast, mpsc, oneshot};

use match_core::{Action, ActionEnvelope, MatchInfo, MatchState, Snapshot, Sport};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::sync::SyncMessage;
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    async fn request<T>(&self, build: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(build(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Load a fresh match with the default profile of `sport`.
    ///
    /// Replaces any match already loaded and broadcasts the first snapshot.
    pub async fn load_match(
        &self,
        match_key: impl Into<String>,
        sport: Sport,
        info: MatchInfo,
    ) -> Result<Snapshot> {
        let match_key = match_key.into();
        self.request(|reply| Command::LoadMatch {
            match_key,
            sport,
            info,
            reply,
        })
        .await
    }

    /// Like [`Self::load_match`] but takes an untyped sport identifier.
    pub async fn load_match_named(
        &self,
        match_key: impl Into<String>,
        sport: &str,
        info: MatchInfo,
    ) -> Result<Snapshot> {
        let sport = Sport::parse(sport)?;
        self.load_match(match_key, sport, info).await
    }

    /// Drop the loaded match. Ticks become no-ops until the next load.
    pub async fn unload_match(&self) -> Result<()> {
        self.request(|reply| Command::UnloadMatch { reply }).await?
    }

    /// Re-initialize the loaded match for its current sport.
    pub async fn reset_match(&self) -> Result<MatchState> {
        self.dispatch(match_core::MatchAction::Reset.into()).await
    }

    /// Apply a typed action and return the resulting state.
    pub async fn dispatch(&self, action: Action) -> Result<MatchState> {
        self.request(|reply| Command::Dispatch { action, reply }).await?
    }

    /// Parse and apply an action envelope.
    ///
    /// Unknown or malformed envelopes return the unchanged state. An unknown
    /// sport is an error.
    pub async fn dispatch_envelope(&self, envelope: ActionEnvelope) -> Result<MatchState> {
        self.request(|reply| Command::DispatchEnvelope { envelope, reply }).await?
    }

    /// Query the current match state (read-only snapshot)
    pub async fn query_state(&self) -> Result<MatchState> {
        Ok(self.query_snapshot().await?.state)
    }

    /// Query the current state together with its display info.
    pub async fn query_snapshot(&self) -> Result<Snapshot> {
        self.request(|reply| Command::QuerySnapshot { reply }).await?
    }

    /// Handle a sync message coming from a display.
    ///
    /// `hello` and `request_state` broadcast a fresh snapshot on
    /// [`Topic::Sync`] and return it.
    pub async fn handle_sync(&self, message: SyncMessage) -> Result<Option<Snapshot>> {
        self.request(|reply| Command::Sync { message, reply }).await?
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::State` - Match lifecycle, applied actions, clock expiry
    /// - `Topic::Sync` - Outbound snapshots for displays
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use runtime::Topic;
    ///
    /// let mut sync_rx = handle.subscribe(Topic::Sync);
    /// while let Ok(event) = sync_rx.recv().await {
    ///     // Forward snapshots to the display transport
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
