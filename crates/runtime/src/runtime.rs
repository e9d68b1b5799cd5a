//! High-level runtime orchestrator.
//!
//! The runtime owns background workers, wires up command/event channels, and
//! exposes a builder-based API for clients to drive a match.

use std::env;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Duration;

use match_core::{EngineConfig, MatchInfo, Sport, init_match_state};

use crate::api::{Result, RuntimeError, RuntimeHandle, SnapshotPublisher};
use crate::events::{EventBus, Topic};
use crate::workers::{Command, PublisherWorker, SimulationWorker, TickerWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Period of the ticker in milliseconds. Each tick advances the engine by
    /// one fixed step, so values other than the engine step speed the match
    /// up or slow it down.
    pub tick_interval_ms: u64,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// Broadcast a snapshot after every tick that changed the state
    /// (default: false, displays tick locally)
    pub publish_ticks: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: EngineConfig::TICK_MS,
            event_buffer_size: 100,
            command_buffer_size: 32,
            publish_ticks: false,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SCOREBOARD_TICK_MS` - Ticker period in milliseconds (default: 100)
    /// - `SCOREBOARD_EVENT_BUFFER` - Per-topic event capacity (default: 100)
    /// - `SCOREBOARD_COMMAND_BUFFER` - Command queue size (default: 32)
    /// - `SCOREBOARD_PUBLISH_TICKS` - Broadcast after every tick (default: false)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(ms) = parse::<u64>(lookup("SCOREBOARD_TICK_MS")) {
            config.tick_interval_ms = ms.max(1);
        }
        if let Some(capacity) = parse::<usize>(lookup("SCOREBOARD_EVENT_BUFFER")) {
            config.event_buffer_size = capacity.max(1);
        }
        if let Some(capacity) = parse::<usize>(lookup("SCOREBOARD_COMMAND_BUFFER")) {
            config.command_buffer_size = capacity.max(1);
        }
        if let Some(enable) = parse::<bool>(lookup("SCOREBOARD_PUBLISH_TICKS")) {
            config.publish_ticks = enable;
        }

        config
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

fn parse<T>(value: Option<String>) -> Option<T>
where
    T: std::str::FromStr,
{
    value?.trim().parse().ok()
}

/// Main runtime that orchestrates one live match
///
/// Design: Runtime owns workers and coordinates execution.
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    // Shared handle (can be cloned for clients)
    handle: RuntimeHandle,

    // Background workers
    sim_worker_handle: JoinHandle<()>,
    ticker_handle: JoinHandle<()>,
    publisher_handle: Option<JoinHandle<()>>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Shutdown the runtime gracefully
    ///
    /// Stops the ticker, then waits for the simulation worker to drain its
    /// queue. Every other handle clone must be dropped first or this waits
    /// for them.
    pub async fn shutdown(self) -> Result<()> {
        self.ticker_handle.abort();
        drop(self.handle);

        self.sim_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;

        if let Some(publisher_handle) = self.publisher_handle {
            publisher_handle.await.map_err(RuntimeError::WorkerJoin)?;
        }

        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    initial_match: Option<(String, Sport, MatchInfo)>,
    publisher: Option<Arc<dyn SnapshotPublisher>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            initial_match: None,
            publisher: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Start with a match already loaded
    pub fn initial_match(
        mut self,
        match_key: impl Into<String>,
        sport: Sport,
        info: MatchInfo,
    ) -> Self {
        self.initial_match = Some((match_key.into(), sport, info));
        self
    }

    /// Set the transport for outbound snapshots (optional)
    pub fn publisher(mut self, publisher: impl SnapshotPublisher + 'static) -> Self {
        self.publisher = Some(Arc::new(publisher));
        self
    }

    /// Build the runtime and spawn its workers
    ///
    /// Must be called from within a Tokio runtime.
    pub fn build(self) -> Result<Runtime> {
        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let handle = RuntimeHandle::new(command_tx.clone(), event_bus.clone());

        // Subscribe before the simulation worker can publish anything.
        let publisher_handle = self.publisher.map(|publisher| {
            let worker = PublisherWorker::new(event_bus.subscribe(Topic::Sync), publisher);
            tokio::spawn(async move {
                worker.run().await;
            })
        });

        let initial = self
            .initial_match
            .map(|(key, sport, info)| (init_match_state(key, sport), info));
        let sim_worker = SimulationWorker::new(
            initial,
            command_rx,
            event_bus,
            self.config.publish_ticks,
        );
        let sim_worker_handle = tokio::spawn(async move {
            sim_worker.run().await;
        });

        let ticker = TickerWorker::new(command_tx, self.config.tick_interval());
        let ticker_handle = tokio::spawn(async move {
            ticker.run().await;
        });

        tracing::info!(
            tick_interval_ms = self.config.tick_interval_ms,
            publish_ticks = self.config.publish_ticks,
            "Runtime started"
        );

        Ok(Runtime {
            handle,
            sim_worker_handle,
            ticker_handle,
            publisher_handle,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_engine_tick() {
        let config = RuntimeConfig::default();
        assert_eq!(config.tick_interval(), Duration::from_millis(100));
        assert_eq!(config.command_buffer_size, 32);
        assert!(!config.publish_ticks);
    }

    #[test]
    fn env_overrides_and_clamps() {
        let vars = std::collections::HashMap::from([
            ("SCOREBOARD_TICK_MS", "0"),
            ("SCOREBOARD_EVENT_BUFFER", "256"),
            ("SCOREBOARD_COMMAND_BUFFER", "lots"),
            ("SCOREBOARD_PUBLISH_TICKS", "true"),
        ]);
        let config = RuntimeConfig::from_vars(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.tick_interval_ms, 1);
        assert_eq!(config.event_buffer_size, 256);
        assert_eq!(config.command_buffer_size, 32);
        assert!(config.publish_ticks);
    }

    #[test]
    fn empty_env_keeps_defaults() {
        let config = RuntimeConfig::from_vars(|_| None);
        assert_eq!(config.tick_interval_ms, RuntimeConfig::default().tick_interval_ms);
        assert!(!config.publish_ticks);
    }
}
