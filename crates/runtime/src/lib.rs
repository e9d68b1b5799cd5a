//! Runtime orchestration for a live scoreboard match.
//!
//! This crate wires the pure `match-core` engine into tokio tasks: a single
//! simulation worker owns the state, a ticker drives the clock, and a
//! publisher hands snapshots to whatever transport reaches the displays.
//! Consumers embed [`Runtime`] and interact with the match through
//! [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator, builder and configuration
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`sync`] holds the display handshake and the display-side mirror
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod events;
pub mod runtime;
pub mod sync;

mod workers;

pub use api::{ChannelPublisher, Result, RuntimeError, RuntimeHandle, SnapshotPublisher};
pub use events::{Event, EventBus, StateEvent, Topic};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
pub use sync::{DisplayMirror, MirrorConfig, SyncMessage};
