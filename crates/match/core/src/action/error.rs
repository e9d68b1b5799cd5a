//! Errors raised while turning untyped envelopes into actions.

use crate::error::{EngineError, ErrorSeverity};
use crate::sport::SportError;

/// Raised by [`crate::action::ActionEnvelope`] parsing.
///
/// Unknown action types and malformed payloads are not errors; they parse to
/// nothing and the reducer leaves the state alone. Only an unknown sport is
/// surfaced, because it can only come from a broken caller.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("action '{action}' names an unknown sport: {source}")]
    UnknownSport {
        action: String,
        #[source]
        source: SportError,
    },
}

impl EngineError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ActionError::UnknownSport { source, .. } => source.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ActionError::UnknownSport { .. } => "ACTION_UNKNOWN_SPORT",
        }
    }
}
