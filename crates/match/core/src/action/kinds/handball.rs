use crate::action::ActionTransition;
use crate::engine::reducer::StateReducer;
use crate::state::{MatchState, Side, Suspension};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandballAction {
    Goal { side: Side },
    GoalUndo { side: Side },
    Timeout { side: Side },
    TimeoutUndo { side: Side },
    Suspend { side: Side, minutes: u32 },
    /// Drops the most recently added suspension of `side`.
    RemoveLastSuspension { side: Side },
}

impl HandballAction {
    pub fn type_name(&self) -> &'static str {
        match self {
            HandballAction::Goal { .. } => "hb:goal",
            HandballAction::GoalUndo { .. } => "hb:goal:dec",
            HandballAction::Timeout { .. } => "hb:timeout",
            HandballAction::TimeoutUndo { .. } => "hb:timeout:dec",
            HandballAction::Suspend { .. } => "hb:susp",
            HandballAction::RemoveLastSuspension { .. } => "hb:susp:remove",
        }
    }
}

impl ActionTransition for HandballAction {
    fn apply(&self, state: &mut MatchState) {
        match *self {
            HandballAction::Goal { side } => StateReducer::new(state).score().add(side, 1),
            HandballAction::GoalUndo { side } => {
                StateReducer::new(state).score().subtract(side, 1)
            }
            HandballAction::Timeout { side } => {
                if let Some(meta) = state.meta.handball_mut() {
                    let taken = &mut meta.timeouts[side];
                    *taken = taken.saturating_add(1).min(meta.max_timeouts_per_team);
                }
            }
            HandballAction::TimeoutUndo { side } => {
                if let Some(meta) = state.meta.handball_mut() {
                    meta.timeouts[side] = meta.timeouts[side].saturating_sub(1);
                }
            }
            HandballAction::Suspend { side, minutes } => {
                if let Some(meta) = state.meta.handball_mut() {
                    meta.suspensions[side].push(Suspension::from_minutes(minutes));
                }
            }
            HandballAction::RemoveLastSuspension { side } => {
                if let Some(meta) = state.meta.handball_mut() {
                    meta.suspensions[side].pop();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::init_match_state;
    use crate::sport::Sport;

    fn handball() -> MatchState {
        init_match_state("org:hb", Sport::Handball)
    }

    #[test]
    fn timeouts_cap_at_three() {
        let mut state = handball();
        for _ in 0..10 {
            HandballAction::Timeout { side: Side::Home }.apply(&mut state);
        }
        assert_eq!(state.meta.handball().unwrap().timeouts.home, 3);
        for _ in 0..10 {
            HandballAction::TimeoutUndo { side: Side::Home }.apply(&mut state);
        }
        assert_eq!(state.meta.handball().unwrap().timeouts.home, 0);
    }

    #[test]
    fn remove_pops_most_recent_suspension() {
        let mut state = handball();
        HandballAction::Suspend {
            side: Side::Away,
            minutes: 2,
        }
        .apply(&mut state);
        state.meta.handball_mut().unwrap().suspensions.away[0].remaining_ms = 500;
        HandballAction::Suspend {
            side: Side::Away,
            minutes: 4,
        }
        .apply(&mut state);

        HandballAction::RemoveLastSuspension { side: Side::Away }.apply(&mut state);

        let suspensions = &state.meta.handball().unwrap().suspensions.away;
        assert_eq!(suspensions, &vec![Suspension { remaining_ms: 500 }]);
    }

    #[test]
    fn remove_on_empty_list_is_noop() {
        let mut state = handball();
        let before = state.clone();
        HandballAction::RemoveLastSuspension { side: Side::Home }.apply(&mut state);
        assert_eq!(state, before);
    }
}
