use crate::action::ActionTransition;
use crate::engine::reducer::StateReducer;
use crate::sport::Sport;
use crate::state::{MatchState, Side};

/// Lifecycle actions that swap profiles or rebuild the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchAction {
    /// Re-initializes clock and metadata for `sport` (the current sport when
    /// `None`) but keeps the score, so a misconfigured sport can be fixed
    /// without losing tallies.
    SetSport { sport: Option<Sport> },
    /// Rebuilds the whole state for `sport`; nothing is preserved.
    Init { sport: Sport },
    /// Rebuilds the whole state for the current sport.
    Reset,
}

impl MatchAction {
    pub fn type_name(&self) -> &'static str {
        match self {
            MatchAction::SetSport { .. } => "sport:set",
            MatchAction::Init { sport } => match sport {
                Sport::Basic => "basic:init",
                Sport::Football => "fb:init",
                Sport::Handball => "hb:init",
                Sport::Basketball => "bb:init",
                Sport::IceHockey => "hi:init",
                Sport::FieldHockey => "hf:init",
                Sport::Volleyball => "vb:init",
            },
            MatchAction::Reset => "match:reset",
        }
    }
}

impl ActionTransition for MatchAction {
    fn apply(&self, state: &mut MatchState) {
        let current = state.sport;
        let mut reducer = StateReducer::new(state);
        match *self {
            MatchAction::SetSport { sport } => reducer.switch_sport(sport.unwrap_or(current)),
            MatchAction::Init { sport } => reducer.reinitialize(sport),
            MatchAction::Reset => reducer.reinitialize(current),
        }
    }
}

/// Main clock control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClockAction {
    Start,
    Stop,
    Set { remaining_ms: u64 },
    /// Restores the default duration of the state's current sport.
    Reset,
    NextPeriod,
    PrevPeriod,
}

impl ClockAction {
    pub fn type_name(&self) -> &'static str {
        match self {
            ClockAction::Start => "clock:start",
            ClockAction::Stop => "clock:stop",
            ClockAction::Set { .. } => "clock:set",
            ClockAction::Reset => "clock:reset",
            ClockAction::NextPeriod => "period:next",
            ClockAction::PrevPeriod => "period:prev",
        }
    }
}

impl ActionTransition for ClockAction {
    fn apply(&self, state: &mut MatchState) {
        let sport = state.sport;
        let mut reducer = StateReducer::new(state);
        let mut clock = reducer.clock();
        match *self {
            ClockAction::Start => clock.start(),
            ClockAction::Stop => clock.stop(),
            ClockAction::Set { remaining_ms } => clock.set_remaining(remaining_ms),
            ClockAction::Reset => clock.reset_for(sport),
            ClockAction::NextPeriod => clock.next_period(),
            ClockAction::PrevPeriod => clock.prev_period(),
        }
    }
}

/// Generic score primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScoreAction {
    Increment { side: Side, amount: u32 },
    Decrement { side: Side, amount: u32 },
}

impl ScoreAction {
    pub const fn increment(side: Side) -> Self {
        ScoreAction::Increment { side, amount: 1 }
    }

    pub const fn decrement(side: Side) -> Self {
        ScoreAction::Decrement { side, amount: 1 }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            ScoreAction::Increment { .. } => "score:inc",
            ScoreAction::Decrement { .. } => "score:dec",
        }
    }
}

impl ActionTransition for ScoreAction {
    fn apply(&self, state: &mut MatchState) {
        let mut reducer = StateReducer::new(state);
        match *self {
            ScoreAction::Increment { side, amount } => reducer.score().add(side, amount),
            ScoreAction::Decrement { side, amount } => reducer.score().subtract(side, amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::init_match_state;
    use crate::state::{ScoreState, SportMeta};

    #[test]
    fn sport_switch_keeps_score_and_replaces_meta() {
        let mut state = init_match_state("org:m1", Sport::Basic);
        ScoreAction::Increment {
            side: Side::Home,
            amount: 3,
        }
        .apply(&mut state);
        state.clock.period = 2;

        MatchAction::SetSport {
            sport: Some(Sport::Handball),
        }
        .apply(&mut state);

        assert_eq!(state.sport, Sport::Handball);
        assert_eq!(state.score, ScoreState::new(3, 0));
        assert_eq!(state.clock.duration_sec, 1800);
        assert_eq!(state.clock.period, 1);
        assert!(matches!(state.meta, SportMeta::Handball(_)));
        assert_eq!(state.match_id, "org:m1");
    }

    #[test]
    fn sport_switch_without_sport_reloads_current_profile() {
        let mut state = init_match_state("org:m1", Sport::Football);
        state.meta.football_mut().unwrap().stoppage_min = 4;
        state.score = ScoreState::new(1, 1);

        MatchAction::SetSport { sport: None }.apply(&mut state);

        assert_eq!(state.meta.football().unwrap().stoppage_min, 0);
        assert_eq!(state.score, ScoreState::new(1, 1));
    }

    #[test]
    fn init_and_reset_discard_everything() {
        let mut state = init_match_state("org:m1", Sport::Football);
        state.score = ScoreState::new(2, 1);

        MatchAction::Init {
            sport: Sport::Volleyball,
        }
        .apply(&mut state);
        assert_eq!(state.sport, Sport::Volleyball);
        assert_eq!(state.score, ScoreState::default());

        state.score = ScoreState::new(10, 3);
        MatchAction::Reset.apply(&mut state);
        assert_eq!(state, init_match_state("org:m1", Sport::Volleyball));
    }

    #[test]
    fn clock_controls() {
        let mut state = init_match_state("org:m1", Sport::Basic);
        ClockAction::Start.apply(&mut state);
        assert!(state.clock.running);
        ClockAction::Set { remaining_ms: 1234 }.apply(&mut state);
        assert_eq!(state.clock.remaining_ms, 1234);
        ClockAction::Stop.apply(&mut state);
        assert!(!state.clock.running);
        ClockAction::Reset.apply(&mut state);
        assert_eq!(state.clock.remaining_ms, 600_000);
    }

    #[test]
    fn clock_reset_uses_current_sport() {
        let mut state = init_match_state("org:m1", Sport::Basic);
        state.sport = Sport::IceHockey;
        state.clock.remaining_ms = 5;
        ClockAction::Reset.apply(&mut state);
        assert_eq!(state.clock.duration_sec, 1200);
        assert_eq!(state.clock.remaining_ms, 1_200_000);
    }

    #[test]
    fn period_floor_is_one() {
        let mut state = init_match_state("org:m1", Sport::Basic);
        ClockAction::PrevPeriod.apply(&mut state);
        assert_eq!(state.clock.period, 1);
        ClockAction::NextPeriod.apply(&mut state);
        ClockAction::NextPeriod.apply(&mut state);
        ClockAction::PrevPeriod.apply(&mut state);
        assert_eq!(state.clock.period, 2);
    }

    #[test]
    fn score_decrement_clamps_at_zero() {
        let mut state = init_match_state("org:m1", Sport::Basic);
        ScoreAction::Increment {
            side: Side::Away,
            amount: 2,
        }
        .apply(&mut state);
        ScoreAction::Decrement {
            side: Side::Away,
            amount: 5,
        }
        .apply(&mut state);
        assert_eq!(state.score.away, 0);
        ScoreAction::decrement(Side::Home).apply(&mut state);
        assert_eq!(state.score.home, 0);
    }
}
