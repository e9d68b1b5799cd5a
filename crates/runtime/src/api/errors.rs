//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination, envelope parsing and snapshot
//! publishers so clients can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use match_core::{ActionError, EngineError, SportError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("no match is loaded")]
    MatchNotLoaded,

    #[error("simulation worker command channel closed")]
    CommandChannelClosed,

    #[error("simulation worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("display mirror stopped")]
    MirrorClosed,

    #[error("runtime worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error(transparent)]
    Action(#[from] ActionError),

    #[error(transparent)]
    Sport(#[from] SportError),

    #[error("snapshot publisher failed: {reason}")]
    Publish { reason: String },

    #[error("snapshot transport I/O failed")]
    Io(#[from] std::io::Error),

    #[error("failed to encode or decode a sync message")]
    Serialization(#[from] serde_json::Error),
}

impl RuntimeError {
    /// Error code of the underlying engine error, if this wraps one.
    pub fn engine_code(&self) -> Option<&'static str> {
        match self {
            RuntimeError::Action(error) => Some(error.error_code()),
            RuntimeError::Sport(error) => Some(error.error_code()),
            _ => None,
        }
    }
}
