//! Event types for different topics.

use match_core::Sport;
use serde::{Deserialize, Serialize};

/// Match lifecycle and change notifications.
///
/// These are lightweight; subscribers that need the state itself listen on
/// [`super::Topic::Sync`] or query the handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StateEvent {
    MatchLoaded { match_id: String, sport: Sport },

    MatchUnloaded { match_id: String },

    /// An action went through the reducer.
    ActionApplied {
        match_id: String,
        /// Wire `type` of the action.
        action: String,
        /// False when the reducer left the state untouched.
        changed: bool,
    },

    /// The main clock ran out during a tick.
    ClockExpired { match_id: String, period: u32 },

    /// The basketball shot clock ran out during a tick.
    ShotClockExpired { match_id: String },
}
