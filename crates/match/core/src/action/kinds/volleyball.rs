use crate::action::ActionTransition;
use crate::engine::reducer::StateReducer;
use crate::state::{MatchState, PerSide, Side};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VolleyballAction {
    Point { side: Side },
    PointUndo { side: Side },
    Serve { side: Side },
    Timeout { side: Side },
    TimeoutUndo { side: Side },
    /// Closes the current set if the score allows it; otherwise a no-op.
    NextSet,
}

impl VolleyballAction {
    pub fn type_name(&self) -> &'static str {
        match self {
            VolleyballAction::Point { .. } => "vb:point",
            VolleyballAction::PointUndo { .. } => "vb:point:dec",
            VolleyballAction::Serve { .. } => "vb:serve",
            VolleyballAction::Timeout { .. } => "vb:timeout",
            VolleyballAction::TimeoutUndo { .. } => "vb:timeout:dec",
            VolleyballAction::NextSet => "vb:nextSet",
        }
    }
}

impl ActionTransition for VolleyballAction {
    fn apply(&self, state: &mut MatchState) {
        match *self {
            VolleyballAction::Point { side } => {
                StateReducer::new(state).score().add(side, 1);
                return;
            }
            VolleyballAction::PointUndo { side } => {
                StateReducer::new(state).score().subtract(side, 1);
                return;
            }
            _ => {}
        }

        let score = state.score;
        let Some(meta) = state.meta.volleyball_mut() else {
            return;
        };

        match *self {
            VolleyballAction::Point { .. } | VolleyballAction::PointUndo { .. } => {}
            VolleyballAction::Serve { side } => meta.serve = side,
            VolleyballAction::Timeout { side } => {
                let taken = &mut meta.timeouts[side];
                *taken = taken.saturating_add(1).min(meta.max_timeouts_per_set);
            }
            VolleyballAction::TimeoutUndo { side } => {
                meta.timeouts[side] = meta.timeouts[side].saturating_sub(1);
            }
            VolleyballAction::NextSet => {
                let Some(winner) = meta.set_winner(&score) else {
                    return;
                };
                meta.sets_won[winner] = meta.sets_won[winner].saturating_add(1);
                meta.current_set = meta.current_set.saturating_add(1);
                meta.timeouts = PerSide::default();
                StateReducer::new(state).score().clear();
            }
        }
    }
}
