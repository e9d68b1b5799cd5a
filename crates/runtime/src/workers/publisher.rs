//! Forwards outbound sync messages to the configured transport.

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::api::SnapshotPublisher;
use crate::events::Event;

/// Drains [`crate::Topic::Sync`] and hands every message to the publisher.
///
/// Publisher failures are logged and skipped; the next snapshot supersedes
/// the lost one.
pub struct PublisherWorker {
    event_rx: broadcast::Receiver<Event>,
    publisher: Arc<dyn SnapshotPublisher>,
}

impl PublisherWorker {
    pub fn new(event_rx: broadcast::Receiver<Event>, publisher: Arc<dyn SnapshotPublisher>) -> Self {
        Self {
            event_rx,
            publisher,
        }
    }

    pub async fn run(mut self) {
        loop {
            match self.event_rx.recv().await {
                Ok(Event::Sync(message)) => {
                    if let Err(error) = self.publisher.publish(&message).await {
                        warn!(
                            target: "runtime::publisher",
                            event = message.event_name(),
                            %error,
                            "Failed to publish sync message"
                        );
                    }
                }
                Ok(Event::State(_)) => {}
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(
                        target: "runtime::publisher",
                        skipped,
                        "Publisher lagging behind, dropped sync messages"
                    );
                }
                Err(broadcast::error::RecvError::Closed) => {
                    debug!(target: "runtime::publisher", "Event bus closed, publisher stopping");
                    break;
                }
            }
        }
    }
}
