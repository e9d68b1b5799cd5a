//! Snapshot transport writing one JSON message per line.

use async_trait::async_trait;
use runtime::{RuntimeError, SnapshotPublisher, SyncMessage};
use tokio::io::{AsyncWrite, AsyncWriteExt, Stdout};
use tokio::sync::Mutex;

/// Publishes sync messages as newline-delimited JSON to a writer.
///
/// Displays attached to the other end of the pipe replace their state with
/// each `state` line they read.
pub struct JsonLinesPublisher<W> {
    writer: Mutex<W>,
}

impl<W> JsonLinesPublisher<W>
where
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl JsonLinesPublisher<Stdout> {
    pub fn stdout() -> Self {
        Self::new(tokio::io::stdout())
    }
}

#[async_trait]
impl<W> SnapshotPublisher for JsonLinesPublisher<W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn publish(&self, message: &SyncMessage) -> runtime::Result<()> {
        let mut line = message.to_json()?;
        line.push('\n');

        let mut writer = self.writer.lock().await;
        writer.write_all(line.as_bytes()).await?;
        writer.flush().await.map_err(RuntimeError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use match_core::{MatchInfo, Snapshot, Sport, init_match_state};

    #[tokio::test]
    async fn writes_one_message_per_line() {
        let publisher = JsonLinesPublisher::new(Vec::new());
        let snapshot = Snapshot::new(
            init_match_state("org:pipe", Sport::Volleyball),
            MatchInfo::new("Semi", "North", "South"),
            7,
        );

        publisher
            .publish(&SyncMessage::State(snapshot.clone()))
            .await
            .expect("first publish");
        publisher
            .publish(&SyncMessage::display_hello())
            .await
            .expect("second publish");

        let output = String::from_utf8(publisher.into_inner()).expect("utf8 output");
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            SyncMessage::from_json(lines[0]).expect("decode state"),
            SyncMessage::State(snapshot)
        );
        assert_eq!(
            SyncMessage::from_json(lines[1]).expect("decode hello"),
            SyncMessage::display_hello()
        );
    }
}
