//! Operator-side scoreboard client.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Runtime (match state, ticker, snapshot publisher)
//!   └─→ Frontend (operator input, e.g. the JSON console)
//! ```
//!
//! The binary assembles both from environment configuration, loads the
//! configured match and hands control to the frontend until it exits.

mod builder;
pub mod config;
pub mod console;
pub mod logging;
pub mod publisher;

pub use builder::ClientBuilder;
pub use config::{ClientConfig, LogConfig};
pub use console::{ConsoleInput, JsonConsole};
pub use publisher::JsonLinesPublisher;

use anyhow::{Context, Result};
use async_trait::async_trait;
use match_core::{MatchInfo, Sport};
use runtime::RuntimeHandle;

/// Operator input surface driving the runtime through its handle.
#[async_trait]
pub trait Frontend: Send {
    /// Runs until the operator is done. Returning ends the client.
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()>;
}

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. Client::builder() takes an already built runtime, a frontend and
///    optionally the match to open
/// 2. Client::run() loads that match and transfers control to the frontend
/// 3. On frontend exit or Ctrl-C the runtime is shut down
pub struct Client {
    runtime: runtime::Runtime,
    frontend: Box<dyn Frontend>,
    opening: Option<MatchSetup>,
}

/// Match loaded when the client starts.
struct MatchSetup {
    match_key: String,
    sport: Sport,
    info: MatchInfo,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the client until the frontend finishes or the process is interrupted.
    pub async fn run(self) -> Result<()> {
        let handle = self.runtime.handle();
        let mut frontend = self.frontend;

        if let Some(setup) = self.opening {
            let snapshot = handle
                .load_match(setup.match_key.as_str(), setup.sport, setup.info)
                .await
                .with_context(|| format!("failed to load match '{}'", setup.match_key))?;
            tracing::info!(
                match_id = %snapshot.state.match_id,
                sport = %snapshot.state.sport,
                "Match opened"
            );
        }

        let frontend_result = tokio::select! {
            result = frontend.run(handle) => result,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted, shutting down");
                Ok(())
            }
        };
        // The frontend may hold handle clones; release them before shutdown.
        drop(frontend);

        self.runtime
            .shutdown()
            .await
            .context("runtime shutdown failed")?;

        frontend_result
    }
}
