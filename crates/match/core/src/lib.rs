//! Deterministic scoreboard logic shared by operator and display sides.
//!
//! `match-core` defines the canonical rules for a live match: the sport
//! profiles, the [`MatchState`] snapshot, the action vocabulary and the two
//! pure transitions that evolve a state. All mutation flows through
//! [`engine::MatchEngine`]; the free functions [`reduce`] and [`tick`] wrap it
//! for callers that want immutable snapshots in and out.
pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod profile;
pub mod snapshot;
pub mod sport;
pub mod state;

#[cfg(feature = "serde")]
pub use action::{ActionEnvelope, reduce_envelope};
pub use action::{
    Action, ActionError, ActionTransition, BasketballAction, ClockAction, FieldHockeyAction,
    FootballAction, HandballAction, IceHockeyAction, MatchAction, ScoreAction, VolleyballAction,
};
pub use config::EngineConfig;
pub use engine::{MatchEngine, TickOutcome, reduce, tick};
pub use error::{EngineError, ErrorSeverity};
pub use profile::{default_clock, default_meta, init_match_state, init_match_state_named};
pub use snapshot::{MatchInfo, Snapshot};
pub use sport::{Sport, SportError};
pub use state::{
    BasketballMeta, CardColor, ClockState, FieldHockeyCards, FieldHockeyMeta,
    FieldHockeySuspension, FootballCards, FootballMeta, HandballMeta, IceHockeyMeta,
    IcePenalty, MatchState, PerSide, Player, Roster, ScoreState, ShootoutState, ShotClock,
    ShotOutcome, Side, SportMeta, Suspension, TechnicalTimeout, VolleyballMeta,
};
