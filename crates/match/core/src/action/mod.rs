//! Action vocabulary understood by the reducer.
//!
//! # Module Structure
//!
//! - `kinds`: one module per action family (match control, each sport) with
//!   its [`ActionTransition`] implementation
//! - `envelope`: the `{ type, payload }` wire form and its parser
//!   (behind the `serde` feature)
//! - `error`: errors raised while parsing envelopes
//!
//! Every mutating action has a hand-written inverse (`GoalUndo` for `Goal`,
//! `RemoveLast` for `Add`, ...). There is no generic undo log.
#[cfg(feature = "serde")]
mod envelope;
mod error;
pub mod kinds;

#[cfg(feature = "serde")]
pub use envelope::{ActionEnvelope, reduce_envelope};
pub use error::ActionError;
pub use kinds::{
    BasketballAction, ClockAction, FieldHockeyAction, FootballAction, HandballAction,
    IceHockeyAction, MatchAction, ScoreAction, VolleyballAction,
};

use crate::state::MatchState;

/// Defines how a concrete action family mutates match state.
///
/// Implementations are total: out-of-range requests clamp, and actions aimed
/// at a different sport's metadata leave the state untouched.
pub trait ActionTransition {
    /// Applies the action by mutating the match state in place.
    fn apply(&self, state: &mut MatchState);
}

/// Top-level action routed by [`crate::engine::MatchEngine`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Sport switch, re-initialization and reset.
    Match(MatchAction),
    Clock(ClockAction),
    /// Generic score primitive used by the basic sport.
    Score(ScoreAction),
    Football(FootballAction),
    Handball(HandballAction),
    Basketball(BasketballAction),
    IceHockey(IceHockeyAction),
    FieldHockey(FieldHockeyAction),
    Volleyball(VolleyballAction),
}

impl Action {
    /// Returns the wire `type` string of this action.
    ///
    /// Used for logging and for building envelopes.
    pub fn type_name(&self) -> &'static str {
        match self {
            Action::Match(action) => action.type_name(),
            Action::Clock(action) => action.type_name(),
            Action::Score(action) => action.type_name(),
            Action::Football(action) => action.type_name(),
            Action::Handball(action) => action.type_name(),
            Action::Basketball(action) => action.type_name(),
            Action::IceHockey(action) => action.type_name(),
            Action::FieldHockey(action) => action.type_name(),
            Action::Volleyball(action) => action.type_name(),
        }
    }
}

impl ActionTransition for Action {
    fn apply(&self, state: &mut MatchState) {
        match self {
            Action::Match(action) => action.apply(state),
            Action::Clock(action) => action.apply(state),
            Action::Score(action) => action.apply(state),
            Action::Football(action) => action.apply(state),
            Action::Handball(action) => action.apply(state),
            Action::Basketball(action) => action.apply(state),
            Action::IceHockey(action) => action.apply(state),
            Action::FieldHockey(action) => action.apply(state),
            Action::Volleyball(action) => action.apply(state),
        }
    }
}

macro_rules! impl_from_action {
    ($($kind:ident => $variant:ident),+ $(,)?) => {
        $(
            impl From<$kind> for Action {
                fn from(action: $kind) -> Self {
                    Action::$variant(action)
                }
            }
        )+
    };
}

impl_from_action! {
    MatchAction => Match,
    ClockAction => Clock,
    ScoreAction => Score,
    FootballAction => Football,
    HandballAction => Handball,
    BasketballAction => Basketball,
    IceHockeyAction => IceHockey,
    FieldHockeyAction => FieldHockey,
    VolleyballAction => Volleyball,
}
