use crate::action::ActionTransition;
use crate::engine::reducer::StateReducer;
use crate::state::{IcePenalty, MatchState, Side};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IceHockeyAction {
    Goal { side: Side },
    GoalUndo { side: Side },
    Penalty { side: Side, minutes: u32 },
    /// Drops the most recently added penalty of `side`.
    RemoveLastPenalty { side: Side },
}

impl IceHockeyAction {
    pub fn type_name(&self) -> &'static str {
        match self {
            IceHockeyAction::Goal { .. } => "hi:goal",
            IceHockeyAction::GoalUndo { .. } => "hi:goal:dec",
            IceHockeyAction::Penalty { .. } => "hi:penalty",
            IceHockeyAction::RemoveLastPenalty { .. } => "hi:penalty:remove",
        }
    }
}

impl ActionTransition for IceHockeyAction {
    fn apply(&self, state: &mut MatchState) {
        match *self {
            IceHockeyAction::Goal { side } => StateReducer::new(state).score().add(side, 1),
            IceHockeyAction::GoalUndo { side } => {
                StateReducer::new(state).score().subtract(side, 1)
            }
            IceHockeyAction::Penalty { side, minutes } => {
                if let Some(meta) = state.meta.ice_hockey_mut() {
                    meta.penalties[side].push(IcePenalty::new(minutes));
                }
            }
            IceHockeyAction::RemoveLastPenalty { side } => {
                if let Some(meta) = state.meta.ice_hockey_mut() {
                    meta.penalties[side].pop();
                }
            }
        }
    }
}
