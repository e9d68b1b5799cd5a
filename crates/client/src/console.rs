//! Line-oriented JSON frontend.
//!
//! Each input line is one JSON object. Objects carrying an `event` field are
//! sync messages relayed from displays; objects carrying a `type` field are
//! operator actions. Blank lines and lines starting with `#` are skipped.

use anyhow::{Context, Result};
use async_trait::async_trait;
use match_core::ActionEnvelope;
use runtime::{RuntimeError, RuntimeHandle, SyncMessage};
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};
use tracing::{debug, info, warn};

use crate::Frontend;

/// A decoded console line.
#[derive(Clone, Debug, PartialEq)]
pub enum ConsoleInput {
    Action(ActionEnvelope),
    Sync(SyncMessage),
}

impl ConsoleInput {
    /// Decode one input line. Returns `Ok(None)` for blank and comment lines.
    pub fn parse(line: &str) -> serde_json::Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let value: Value = serde_json::from_str(line)?;
        let input = if value.get("event").is_some() {
            Self::Sync(serde_json::from_value(value)?)
        } else {
            Self::Action(serde_json::from_value(value)?)
        };
        Ok(Some(input))
    }
}

/// Frontend reading newline-delimited JSON from any buffered reader.
pub struct JsonConsole<R> {
    reader: R,
}

impl<R> JsonConsole<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    async fn handle_line(handle: &RuntimeHandle, line: &str) -> Result<()> {
        let input = match ConsoleInput::parse(line) {
            Ok(Some(input)) => input,
            Ok(None) => return Ok(()),
            Err(error) => {
                warn!(%error, line, "Ignoring malformed console line");
                return Ok(());
            }
        };

        let result = match input {
            ConsoleInput::Action(envelope) => {
                let kind = envelope.kind.clone();
                handle.dispatch_envelope(envelope).await.map(|state| {
                    debug!(
                        action = %kind,
                        home = state.score.home,
                        away = state.score.away,
                        "Action applied"
                    );
                })
            }
            ConsoleInput::Sync(message) => {
                let event = message.event_name();
                handle.handle_sync(message).await.map(|reply| {
                    debug!(event, replied = reply.is_some(), "Sync message handled");
                })
            }
        };

        match result {
            Ok(()) => Ok(()),
            Err(error @ (RuntimeError::Action(_) | RuntimeError::Sport(_))) => {
                warn!(code = error.engine_code(), %error, "Rejected console input");
                Ok(())
            }
            Err(RuntimeError::MatchNotLoaded) => {
                warn!("No match loaded, console input dropped");
                Ok(())
            }
            Err(error) => Err(error).context("runtime stopped while handling console input"),
        }
    }
}

impl JsonConsole<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

#[async_trait]
impl<R> Frontend for JsonConsole<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
        let mut line = String::new();
        loop {
            line.clear();
            let read = self
                .reader
                .read_line(&mut line)
                .await
                .context("failed to read console input")?;
            if read == 0 {
                info!("Console input closed");
                return Ok(());
            }
            Self::handle_line(&handle, &line).await?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use match_core::{MatchInfo, ScoreState, Sport};
    use runtime::Runtime;

    #[test]
    fn parse_routes_by_discriminator() {
        let action = ConsoleInput::parse(r#"{"type":"score:inc","payload":{"team":"away"}}"#)
            .unwrap()
            .unwrap();
        assert!(matches!(action, ConsoleInput::Action(ref e) if e.kind == "score:inc"));

        let sync = ConsoleInput::parse(r#"{"event":"request_state","payload":{"display":true}}"#)
            .unwrap()
            .unwrap();
        assert_eq!(sync, ConsoleInput::Sync(SyncMessage::display_request()));
    }

    #[test]
    fn parse_skips_blank_and_comment_lines() {
        assert_eq!(ConsoleInput::parse("   \n").unwrap(), None);
        assert_eq!(ConsoleInput::parse("# warmup").unwrap(), None);
        assert!(ConsoleInput::parse("not json").is_err());
    }

    #[tokio::test]
    async fn stdin_console_boxes_as_frontend() {
        let frontend: Box<dyn Frontend> = Box::new(JsonConsole::stdin());
        fn is_send<T: Send>(_: &T) {}
        is_send(&frontend);
    }

    #[tokio::test(start_paused = true)]
    async fn console_drives_the_runtime_until_eof() {
        let runtime = Runtime::builder()
            .initial_match("org:console", Sport::Basic, MatchInfo::default())
            .build()
            .expect("runtime should build");
        let handle = runtime.handle();

        let script = concat!(
            "# opening goals\n",
            "{\"type\":\"score:inc\",\"payload\":{\"team\":\"home\",\"amount\":2}}\n",
            "garbage\n",
            "{\"type\":\"sport:set\",\"payload\":{\"sport\":\"curling\"}}\n",
            "{\"type\":\"score:inc\",\"payload\":{\"team\":\"away\"}}\n",
            "{\"event\":\"hello\",\"payload\":{\"display\":true}}\n",
        );
        let mut console = JsonConsole::new(script.as_bytes());
        console
            .run(handle.clone())
            .await
            .expect("console should finish cleanly");

        let state = handle.query_state().await.expect("state query");
        assert_eq!(state.score, ScoreState::new(2, 1));
        assert_eq!(state.sport, Sport::Basic);

        drop(handle);
        runtime.shutdown().await.expect("shutdown");
    }
}
