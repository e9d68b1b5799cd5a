//! Asynchronous abstraction for delivering snapshots to displays.
//!
//! The runtime never talks to a network itself. Users plug in a
//! [`SnapshotPublisher`] that carries outbound [`SyncMessage`]s over whatever
//! transport the deployment uses (a realtime channel, stdout, a test probe).
use async_trait::async_trait;
use tokio::sync::mpsc;

use super::errors::{Result, RuntimeError};
use crate::sync::SyncMessage;

/// Trait for sending sync messages to the display side.
///
/// Implementations should not retry: the next state change or the display's
/// next `request_state` produces a fresh snapshot anyway.
#[async_trait]
pub trait SnapshotPublisher: Send + Sync {
    /// Deliver one outbound message.
    async fn publish(&self, message: &SyncMessage) -> Result<()>;
}

/// Publisher that forwards every message into an in-process channel.
///
/// Useful for embedding a display in the same process and for tests.
pub struct ChannelPublisher {
    tx: mpsc::Sender<SyncMessage>,
}

impl ChannelPublisher {
    pub fn new(tx: mpsc::Sender<SyncMessage>) -> Self {
        Self { tx }
    }

    /// Creates a publisher together with the receiving end.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<SyncMessage>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self::new(tx), rx)
    }
}

#[async_trait]
impl SnapshotPublisher for ChannelPublisher {
    async fn publish(&self, message: &SyncMessage) -> Result<()> {
        self.tx
            .send(message.clone())
            .await
            .map_err(|_| RuntimeError::Publish {
                reason: "receiver dropped".to_owned(),
            })
    }
}
