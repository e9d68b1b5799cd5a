use serde::{Deserialize, Serialize};

use match_core::Snapshot;

use crate::api::Result;

/// Broadcast message exchanged on a match channel.
///
/// Serialized as `{ "event": <name>, "payload": { .. } }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "payload", rename_all = "snake_case")]
pub enum SyncMessage {
    /// A display joined and wants the current state.
    Hello {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        want: Option<String>,
        #[serde(default)]
        display: bool,
    },
    /// A display asks for a fresh snapshot.
    RequestState {
        #[serde(default)]
        display: bool,
    },
    /// Full snapshot from the operator.
    State(Snapshot),
}

impl SyncMessage {
    /// The greeting displays send when they subscribe.
    pub fn display_hello() -> Self {
        SyncMessage::Hello {
            want: Some("state".to_owned()),
            display: true,
        }
    }

    pub fn display_request() -> Self {
        SyncMessage::RequestState { display: true }
    }

    /// Wire name of the message.
    pub fn event_name(&self) -> &'static str {
        match self {
            SyncMessage::Hello { .. } => "hello",
            SyncMessage::RequestState { .. } => "request_state",
            SyncMessage::State(_) => "state",
        }
    }

    /// True for messages the operator must answer with a snapshot.
    pub fn wants_snapshot(&self) -> bool {
        matches!(
            self,
            SyncMessage::Hello { .. } | SyncMessage::RequestState { .. }
        )
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
