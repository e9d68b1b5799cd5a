//! Worker tasks that back the runtime orchestration.
//!
//! The simulation worker owns the match state, the ticker drives the clock,
//! and the publisher hands snapshots to the transport.

mod publisher;
mod simulation;
mod ticker;

pub use publisher::PublisherWorker;
pub use simulation::{Command, SimulationWorker};
pub use ticker::TickerWorker;
