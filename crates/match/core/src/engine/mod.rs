//! Pure transitions over [`MatchState`].
//!
//! [`MatchEngine`] borrows a state mutably and applies actions or tick steps
//! to it. [`reduce`] and [`tick`] are the snapshot-in, snapshot-out forms used
//! by callers that keep immutable history.
pub(crate) mod reducer;
mod tick;

use crate::action::{Action, ActionTransition};
use crate::state::MatchState;

pub use tick::{TickOutcome, decay};

/// Match engine that routes actions and tick steps to the state.
pub struct MatchEngine<'a> {
    state: &'a mut MatchState,
}

impl<'a> MatchEngine<'a> {
    /// Creates a new engine over the given state.
    pub fn new(state: &'a mut MatchState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &MatchState {
        self.state
    }

    /// Applies one action. Total: requests that do not fit the current sport
    /// or would go out of range leave the state unchanged or clamp.
    pub fn apply(&mut self, action: &Action) {
        action.apply(self.state);
    }

    /// Advances every running countdown by one tick step.
    pub fn tick(&mut self) -> TickOutcome {
        tick::advance(self.state)
    }
}

/// Returns the state that results from applying `action` to `state`.
///
/// The input is never mutated; the result is a fresh copy.
pub fn reduce(state: &MatchState, action: &Action) -> MatchState {
    let mut next = state.clone();
    MatchEngine::new(&mut next).apply(action);
    next
}

/// Returns `state` advanced by one tick step.
pub fn tick(state: &MatchState) -> MatchState {
    let mut next = state.clone();
    MatchEngine::new(&mut next).tick();
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ClockAction, HandballAction, ScoreAction};
    use crate::profile::init_match_state;
    use crate::sport::Sport;
    use crate::state::Side;

    #[test]
    fn reduce_leaves_input_untouched() {
        let state = init_match_state("org:m1", Sport::Handball);
        let snapshot = state.clone();

        let next = reduce(&state, &ScoreAction::increment(Side::Home).into());
        let next = reduce(
            &next,
            &HandballAction::Suspend {
                side: Side::Away,
                minutes: 2,
            }
            .into(),
        );

        assert_eq!(state, snapshot);
        assert_eq!(next.score.home, 1);
        assert_eq!(next.meta.handball().unwrap().suspensions.away.len(), 1);
    }

    #[test]
    fn tick_on_stopped_basic_match_is_identity() {
        let state = init_match_state("org:m1", Sport::Basic);
        assert_eq!(tick(&state), state);
    }

    #[test]
    fn engine_reports_expiry() {
        let mut state = init_match_state("org:m1", Sport::Basic);
        let mut engine = MatchEngine::new(&mut state);
        engine.apply(&ClockAction::Set { remaining_ms: 100 }.into());
        engine.apply(&ClockAction::Start.into());
        let outcome = engine.tick();
        assert!(outcome.clock_expired);
        assert!(engine.state().is_expired());
    }
}
