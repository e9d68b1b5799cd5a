use crate::action::ActionTransition;
use crate::engine::reducer::StateReducer;
use crate::state::{CardColor, FieldHockeySuspension, MatchState, Side};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldHockeyAction {
    Goal { side: Side },
    GoalUndo { side: Side },
    /// Green and yellow cards also start a timed suspension.
    Card { side: Side, color: CardColor },
    /// Removes the *first* suspension of the same colour, which is not
    /// necessarily the one the matching card created.
    CardUndo { side: Side, color: CardColor },
}

impl FieldHockeyAction {
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldHockeyAction::Goal { .. } => "hf:goal",
            FieldHockeyAction::GoalUndo { .. } => "hf:goal:dec",
            FieldHockeyAction::Card { .. } => "hf:card",
            FieldHockeyAction::CardUndo { .. } => "hf:card:dec",
        }
    }
}

impl ActionTransition for FieldHockeyAction {
    fn apply(&self, state: &mut MatchState) {
        match *self {
            FieldHockeyAction::Goal { side } => StateReducer::new(state).score().add(side, 1),
            FieldHockeyAction::GoalUndo { side } => {
                StateReducer::new(state).score().subtract(side, 1)
            }
            FieldHockeyAction::Card { side, color } => {
                let Some(meta) = state.meta.field_hockey_mut() else {
                    return;
                };
                let count = meta.cards[side].count_mut(color);
                *count = count.saturating_add(1);
                if let Some(suspension) = FieldHockeySuspension::for_card(color) {
                    meta.suspensions[side].push(suspension);
                }
            }
            FieldHockeyAction::CardUndo { side, color } => {
                let Some(meta) = state.meta.field_hockey_mut() else {
                    return;
                };
                let count = meta.cards[side].count_mut(color);
                if *count == 0 {
                    return;
                }
                *count -= 1;
                let suspensions = &mut meta.suspensions[side];
                if let Some(position) = suspensions.iter().position(|s| s.color == color) {
                    suspensions.remove(position);
                }
            }
        }
    }
}
