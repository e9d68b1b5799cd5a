use crate::action::ActionTransition;
use crate::engine::reducer::StateReducer;
use crate::state::{CardColor, FootballMeta, MatchState, ShootoutState, ShotOutcome, Side};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FootballAction {
    Goal { side: Side },
    GoalUndo { side: Side },
    /// Yellow or red; other colours are ignored.
    Card { side: Side, color: CardColor },
    CardUndo { side: Side, color: CardColor },
    SetStoppage { minutes: u32 },
    StoppageUp,
    StoppageDown,
    ShootoutStart,
    ShootoutRecord { side: Side, outcome: ShotOutcome },
    /// Removes the last kick of `side` only.
    ShootoutUndo { side: Side },
    ShootoutEnd,
}

impl FootballAction {
    pub fn type_name(&self) -> &'static str {
        match self {
            FootballAction::Goal { .. } => "fb:goal",
            FootballAction::GoalUndo { .. } => "fb:goal:dec",
            FootballAction::Card { .. } => "fb:card",
            FootballAction::CardUndo { .. } => "fb:card:dec",
            FootballAction::SetStoppage { .. } => "fb:stoppage",
            FootballAction::StoppageUp => "fb:stoppage:inc",
            FootballAction::StoppageDown => "fb:stoppage:dec",
            FootballAction::ShootoutStart => "fb:so:start",
            FootballAction::ShootoutRecord { .. } => "fb:so:record",
            FootballAction::ShootoutUndo { .. } => "fb:so:undo",
            FootballAction::ShootoutEnd => "fb:so:end",
        }
    }
}

fn card_slot(meta: &mut FootballMeta, side: Side, color: CardColor) -> Option<&mut u32> {
    let cards = &mut meta.cards[side];
    match color {
        CardColor::Yellow => Some(&mut cards.yellow),
        CardColor::Red => Some(&mut cards.red),
        CardColor::Green => None,
    }
}

impl ActionTransition for FootballAction {
    fn apply(&self, state: &mut MatchState) {
        // Goals only touch the score and apply whatever the sport.
        match *self {
            FootballAction::Goal { side } => {
                StateReducer::new(state).score().add(side, 1);
                return;
            }
            FootballAction::GoalUndo { side } => {
                StateReducer::new(state).score().subtract(side, 1);
                return;
            }
            _ => {}
        }

        let Some(meta) = state.meta.football_mut() else {
            return;
        };

        match *self {
            FootballAction::Goal { .. } | FootballAction::GoalUndo { .. } => {}
            FootballAction::Card { side, color } => {
                if let Some(count) = card_slot(meta, side, color) {
                    *count = count.saturating_add(1);
                }
            }
            FootballAction::CardUndo { side, color } => {
                if let Some(count) = card_slot(meta, side, color) {
                    *count = count.saturating_sub(1);
                }
            }
            FootballAction::SetStoppage { minutes } => meta.stoppage_min = minutes,
            FootballAction::StoppageUp => meta.stoppage_min = meta.stoppage_min.saturating_add(1),
            FootballAction::StoppageDown => {
                meta.stoppage_min = meta.stoppage_min.saturating_sub(1)
            }
            FootballAction::ShootoutStart => meta.shootout = ShootoutState::started(),
            FootballAction::ShootoutRecord { side, outcome } => {
                meta.shootout.in_progress = true;
                meta.shootout.kicks[side].push(outcome);
            }
            FootballAction::ShootoutUndo { side } => {
                meta.shootout.kicks[side].pop();
            }
            FootballAction::ShootoutEnd => meta.shootout.in_progress = false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::init_match_state;
    use crate::sport::Sport;

    fn football() -> MatchState {
        init_match_state("org:fb", Sport::Football)
    }

    #[test]
    fn card_and_inverse_round_trip() {
        let mut state = football();
        let before = state.clone();
        FootballAction::Card {
            side: Side::Home,
            color: CardColor::Yellow,
        }
        .apply(&mut state);
        assert_eq!(state.meta.football().unwrap().cards.home.yellow, 1);
        FootballAction::CardUndo {
            side: Side::Home,
            color: CardColor::Yellow,
        }
        .apply(&mut state);
        assert_eq!(state, before);
    }

    #[test]
    fn green_card_is_ignored_and_undo_clamps() {
        let mut state = football();
        let before = state.clone();
        FootballAction::Card {
            side: Side::Away,
            color: CardColor::Green,
        }
        .apply(&mut state);
        FootballAction::CardUndo {
            side: Side::Away,
            color: CardColor::Red,
        }
        .apply(&mut state);
        assert_eq!(state, before);
    }

    #[test]
    fn stoppage_set_and_adjust() {
        let mut state = football();
        FootballAction::SetStoppage { minutes: 3 }.apply(&mut state);
        FootballAction::StoppageUp.apply(&mut state);
        assert_eq!(state.meta.football().unwrap().stoppage_min, 4);
        for _ in 0..6 {
            FootballAction::StoppageDown.apply(&mut state);
        }
        assert_eq!(state.meta.football().unwrap().stoppage_min, 0);
    }

    #[test]
    fn shootout_undo_is_per_side() {
        let mut state = football();
        FootballAction::ShootoutStart.apply(&mut state);
        for (side, outcome) in [
            (Side::Home, ShotOutcome::Goal),
            (Side::Away, ShotOutcome::Miss),
            (Side::Home, ShotOutcome::Miss),
        ] {
            FootballAction::ShootoutRecord { side, outcome }.apply(&mut state);
        }
        FootballAction::ShootoutUndo { side: Side::Away }.apply(&mut state);
        FootballAction::ShootoutUndo { side: Side::Away }.apply(&mut state);

        let shootout = &state.meta.football().unwrap().shootout;
        assert!(shootout.in_progress);
        assert_eq!(shootout.kicks.home, vec![ShotOutcome::Goal, ShotOutcome::Miss]);
        assert!(shootout.kicks.away.is_empty());
        assert_eq!(state.meta.football().unwrap().shootout_goals(Side::Home), 1);
    }

    #[test]
    fn recording_without_start_opens_shootout() {
        let mut state = football();
        FootballAction::ShootoutRecord {
            side: Side::Away,
            outcome: ShotOutcome::Goal,
        }
        .apply(&mut state);
        let shootout = &state.meta.football().unwrap().shootout;
        assert!(shootout.in_progress);
        assert_eq!(shootout.kicks.away.len(), 1);

        FootballAction::ShootoutEnd.apply(&mut state);
        let shootout = &state.meta.football().unwrap().shootout;
        assert!(!shootout.in_progress);
        assert_eq!(shootout.kicks.away.len(), 1);
    }

    #[test]
    fn meta_actions_ignore_other_sports() {
        let mut state = init_match_state("org:hb", Sport::Handball);
        let before = state.clone();
        FootballAction::SetStoppage { minutes: 5 }.apply(&mut state);
        assert_eq!(state, before);

        FootballAction::Goal { side: Side::Home }.apply(&mut state);
        assert_eq!(state.score.home, 1);
    }
}
