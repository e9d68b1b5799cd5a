//! Simulation worker that owns the authoritative [`match_core::MatchState`].
//!
//! Receives commands from [`crate::RuntimeHandle`] and from the ticker,
//! applies them through [`match_core::MatchEngine`], and publishes events to
//! the EventBus. Because actions and ticks arrive on the same channel they
//! are applied strictly one after another.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info, trace};

use match_core::{
    Action, ActionEnvelope, EngineError, MatchAction, MatchEngine, MatchInfo, MatchState, Snapshot, Sport,
    init_match_state,
};

use crate::api::{Result, RuntimeError};
use crate::events::{Event, EventBus, StateEvent};
use crate::sync::SyncMessage;

/// Commands that can be sent to the simulation worker
pub enum Command {
    /// Replace whatever is loaded with a fresh match.
    LoadMatch {
        match_key: String,
        sport: Sport,
        info: MatchInfo,
        reply: oneshot::Sender<Snapshot>,
    },
    /// Drop the loaded match.
    UnloadMatch { reply: oneshot::Sender<Result<()>> },
    /// Apply a typed action.
    Dispatch {
        action: Action,
        reply: oneshot::Sender<Result<MatchState>>,
    },
    /// Parse and apply an untyped action envelope.
    DispatchEnvelope {
        envelope: ActionEnvelope,
        reply: oneshot::Sender<Result<MatchState>>,
    },
    /// Advance every countdown by one tick step. Sent by the ticker.
    Tick,
    /// Query the current snapshot (read-only).
    QuerySnapshot {
        reply: oneshot::Sender<Result<Snapshot>>,
    },
    /// Handle an inbound sync message from a display.
    Sync {
        message: SyncMessage,
        reply: oneshot::Sender<Result<Option<Snapshot>>>,
    },
}

/// The match currently owned by the worker.
struct LoadedMatch {
    state: MatchState,
    info: MatchInfo,
}

impl LoadedMatch {
    fn snapshot(&self) -> Snapshot {
        Snapshot::new(
            self.state.clone(),
            self.info.clone(),
            chrono::Utc::now().timestamp_millis(),
        )
    }
}

/// Background task that processes match commands.
pub struct SimulationWorker {
    current: Option<LoadedMatch>,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    publish_ticks: bool,
}

impl SimulationWorker {
    /// Creates a new simulation worker, optionally with a match already loaded.
    pub fn new(
        initial: Option<(MatchState, MatchInfo)>,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
        publish_ticks: bool,
    ) -> Self {
        if let Some((state, _)) = &initial {
            info!(
                target: "runtime::worker",
                match_id = %state.match_id,
                sport = %state.sport,
                "SimulationWorker initialized with a loaded match"
            );
        }

        Self {
            current: initial.map(|(state, info)| LoadedMatch { state, info }),
            command_rx,
            event_bus,
            publish_ticks,
        }
    }

    /// Main worker loop. Ends when every command sender is dropped.
    pub async fn run(mut self) {
        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd);
        }
        debug!(target: "runtime::worker", "Command channel closed, simulation worker stopping");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::LoadMatch {
                match_key,
                sport,
                info,
                reply,
            } => {
                let snapshot = self.load_match(match_key, sport, info);
                if reply.send(snapshot).is_err() {
                    debug!("LoadMatch reply channel closed (caller dropped)");
                }
            }
            Command::UnloadMatch { reply } => {
                let result = self.unload_match();
                if reply.send(result).is_err() {
                    debug!("UnloadMatch reply channel closed (caller dropped)");
                }
            }
            Command::Dispatch { action, reply } => {
                let result = self.dispatch(&action);
                if reply.send(result).is_err() {
                    debug!("Dispatch reply channel closed (caller dropped)");
                }
            }
            Command::DispatchEnvelope { envelope, reply } => {
                let result = self.dispatch_envelope(&envelope);
                if reply.send(result).is_err() {
                    debug!("DispatchEnvelope reply channel closed (caller dropped)");
                }
            }
            Command::Tick => self.tick(),
            Command::QuerySnapshot { reply } => {
                let result = self
                    .current
                    .as_ref()
                    .map(LoadedMatch::snapshot)
                    .ok_or(RuntimeError::MatchNotLoaded);
                if reply.send(result).is_err() {
                    debug!("QuerySnapshot reply channel closed (caller dropped)");
                }
            }
            Command::Sync { message, reply } => {
                let result = self.handle_sync(&message);
                if reply.send(result).is_err() {
                    debug!("Sync reply channel closed (caller dropped)");
                }
            }
        }
    }

    fn load_match(&mut self, match_key: String, sport: Sport, info: MatchInfo) -> Snapshot {
        let loaded = LoadedMatch {
            state: init_match_state(match_key, sport),
            info,
        };
        info!(
            target: "runtime::worker",
            match_id = %loaded.state.match_id,
            sport = %sport,
            "Match loaded"
        );

        let snapshot = loaded.snapshot();
        self.event_bus.publish(Event::State(StateEvent::MatchLoaded {
            match_id: loaded.state.match_id.clone(),
            sport,
        }));
        self.broadcast(snapshot.clone());
        self.current = Some(loaded);
        snapshot
    }

    fn unload_match(&mut self) -> Result<()> {
        let loaded = self.current.take().ok_or(RuntimeError::MatchNotLoaded)?;
        info!(target: "runtime::worker", match_id = %loaded.state.match_id, "Match unloaded");
        self.event_bus.publish(Event::State(StateEvent::MatchUnloaded {
            match_id: loaded.state.match_id,
        }));
        Ok(())
    }

    fn dispatch_envelope(&mut self, envelope: &ActionEnvelope) -> Result<MatchState> {
        let current = self.current.as_ref().ok_or(RuntimeError::MatchNotLoaded)?;

        match Action::from_envelope(envelope) {
            Ok(Some(action)) => self.dispatch(&action),
            Ok(None) => {
                debug!(
                    target: "runtime::worker",
                    action = %envelope.kind,
                    "Ignoring unknown or malformed action envelope"
                );
                Ok(current.state.clone())
            }
            Err(err) => {
                error!(
                    target: "runtime::worker",
                    action = %envelope.kind,
                    code = err.error_code(),
                    severity = err.severity().as_str(),
                    error = %err,
                    "Rejected action envelope"
                );
                Err(err.into())
            }
        }
    }

    fn dispatch(&mut self, action: &Action) -> Result<MatchState> {
        let current = self.current.as_mut().ok_or(RuntimeError::MatchNotLoaded)?;

        let before = current.state.clone();
        MatchEngine::new(&mut current.state).apply(action);
        let changed = before != current.state;

        debug!(
            target: "runtime::worker",
            action = action.type_name(),
            changed,
            "Action applied"
        );
        if matches!(action, Action::Match(MatchAction::Reset)) {
            info!(target: "runtime::worker", match_id = %current.state.match_id, "Match reset");
        }

        let state = current.state.clone();
        let snapshot = changed.then(|| current.snapshot());

        self.event_bus.publish(Event::State(StateEvent::ActionApplied {
            match_id: state.match_id.clone(),
            action: action.type_name().to_owned(),
            changed,
        }));
        if let Some(snapshot) = snapshot {
            self.broadcast(snapshot);
        }

        Ok(state)
    }

    fn tick(&mut self) {
        let Some(current) = self.current.as_mut() else {
            return;
        };

        let before = self.publish_ticks.then(|| current.state.clone());
        let outcome = MatchEngine::new(&mut current.state).tick();
        if !outcome.is_quiet() {
            trace!(target: "runtime::worker", ?outcome, "Tick");
        }

        let match_id = current.state.match_id.clone();
        if outcome.clock_expired {
            info!(target: "runtime::worker", match_id = %match_id, "Clock expired");
            self.event_bus.publish(Event::State(StateEvent::ClockExpired {
                match_id: match_id.clone(),
                period: current.state.clock.period,
            }));
        }
        if outcome.shot_clock_expired {
            self.event_bus.publish(Event::State(StateEvent::ShotClockExpired {
                match_id,
            }));
        }

        if let Some(before) = before
            && before != current.state
        {
            let snapshot = current.snapshot();
            self.broadcast(snapshot);
        }
    }

    fn handle_sync(&mut self, message: &SyncMessage) -> Result<Option<Snapshot>> {
        if !message.wants_snapshot() {
            // Snapshots only flow from the operator; echoes are ignored.
            trace!(target: "runtime::worker", event = message.event_name(), "Ignoring sync message");
            return Ok(None);
        }

        let current = self.current.as_ref().ok_or(RuntimeError::MatchNotLoaded)?;
        debug!(
            target: "runtime::worker",
            event = message.event_name(),
            match_id = %current.state.match_id,
            "Display asked for state"
        );
        let snapshot = current.snapshot();
        self.broadcast(snapshot.clone());
        Ok(Some(snapshot))
    }

    fn broadcast(&self, snapshot: Snapshot) {
        self.event_bus
            .publish(Event::Sync(SyncMessage::State(snapshot)));
    }
}
