//! Operator binary: reads actions from stdin, writes sync messages to stdout.
use anyhow::{Context, Result};

use runtime::Runtime;
use scoreboard_client::{Client, ClientConfig, JsonConsole, JsonLinesPublisher, logging};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    let _log_guard = logging::setup_logging(&config.logging)?;

    tracing::info!(
        match_key = %config.match_key,
        sport = %config.sport,
        tick_ms = config.runtime.tick_interval_ms,
        "Starting scoreboard"
    );

    let runtime = Runtime::builder()
        .config(config.runtime.clone())
        .publisher(JsonLinesPublisher::stdout())
        .build()
        .context("failed to build runtime")?;

    let client = Client::builder()
        .runtime(runtime)
        .frontend(JsonConsole::stdin())
        .open_match(config.match_key, config.sport, config.info)
        .build()?;

    client.run().await
}
