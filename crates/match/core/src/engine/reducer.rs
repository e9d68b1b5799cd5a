use crate::profile::{default_clock, default_meta, init_match_state};
use crate::sport::Sport;
use crate::state::{ClockState, MatchState, ScoreState, Side};

/// Wraps mutable access to [`MatchState`] with structured sub-reducers.
pub struct StateReducer<'a> {
    state: &'a mut MatchState,
}

impl<'a> StateReducer<'a> {
    pub fn new(state: &'a mut MatchState) -> Self {
        Self { state }
    }

    pub fn clock(&mut self) -> ClockReducer<'_> {
        ClockReducer {
            clock: &mut self.state.clock,
        }
    }

    pub fn score(&mut self) -> ScoreReducer<'_> {
        ScoreReducer {
            score: &mut self.state.score,
        }
    }

    /// Swaps in the profile defaults for `sport`, keeping identity and score.
    pub fn switch_sport(&mut self, sport: Sport) {
        self.state.sport = sport;
        self.state.clock = default_clock(sport);
        self.state.meta = default_meta(sport);
    }

    /// Replaces the whole state with the defaults for `sport`.
    pub fn reinitialize(&mut self, sport: Sport) {
        let match_id = core::mem::take(&mut self.state.match_id);
        *self.state = init_match_state(match_id, sport);
    }
}

pub struct ClockReducer<'a> {
    clock: &'a mut ClockState,
}

impl<'a> ClockReducer<'a> {
    pub fn start(&mut self) {
        self.clock.running = true;
    }

    pub fn stop(&mut self) {
        self.clock.running = false;
    }

    pub fn set_remaining(&mut self, remaining_ms: u64) {
        self.clock.remaining_ms = remaining_ms;
    }

    /// Restores the regulation duration of `sport`, leaving period and
    /// running flag alone.
    pub fn reset_for(&mut self, sport: Sport) {
        let defaults = default_clock(sport);
        self.clock.duration_sec = defaults.duration_sec;
        self.clock.remaining_ms = defaults.remaining_ms;
    }

    pub fn next_period(&mut self) {
        self.clock.period = self.clock.period.saturating_add(1);
    }

    pub fn prev_period(&mut self) {
        self.clock.period = self.clock.period.saturating_sub(1).max(1);
    }

    /// Counts a running clock down by `step_ms`. Returns true if this step
    /// ran the clock out.
    pub fn advance(&mut self, step_ms: u64) -> bool {
        if !self.clock.running {
            return false;
        }
        self.clock.remaining_ms = self.clock.remaining_ms.saturating_sub(step_ms);
        if self.clock.remaining_ms == 0 {
            self.clock.running = false;
            return true;
        }
        false
    }
}

pub struct ScoreReducer<'a> {
    score: &'a mut ScoreState,
}

impl<'a> ScoreReducer<'a> {
    pub fn add(&mut self, side: Side, amount: u32) {
        self.score.add(side, amount);
    }

    pub fn subtract(&mut self, side: Side, amount: u32) {
        self.score.subtract(side, amount);
    }

    pub fn clear(&mut self) {
        *self.score = ScoreState::default();
    }
}
