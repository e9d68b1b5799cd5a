use crate::action::ActionTransition;
use crate::config::EngineConfig;
use crate::engine::reducer::StateReducer;
use crate::state::{BasketballMeta, MatchState, Side};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BasketballAction {
    Score { side: Side, points: u32 },
    ScoreUndo { side: Side, points: u32 },
    /// Personal foul on the roster entry at `index`, mirrored to team fouls.
    Foul { side: Side, index: usize },
    FoulUndo { side: Side, index: usize },
    /// Zeroes team fouls for both sides; personal fouls are kept.
    ResetTeamFouls,
    /// Uses one of the remaining timeouts.
    Timeout { side: Side },
    /// Gives a used timeout back.
    TimeoutRestore { side: Side },
    ShotClockStart,
    ShotClockStop,
    ShotClockFull,
    ShotClockShort,
    ShotClockSet { ms: u64 },
}

impl BasketballAction {
    pub fn type_name(&self) -> &'static str {
        match self {
            BasketballAction::Score { .. } => "bb:score",
            BasketballAction::ScoreUndo { .. } => "bb:score:dec",
            BasketballAction::Foul { .. } => "bb:foul",
            BasketballAction::FoulUndo { .. } => "bb:foul:dec",
            BasketballAction::ResetTeamFouls => "bb:tf:reset",
            BasketballAction::Timeout { .. } => "bb:to",
            BasketballAction::TimeoutRestore { .. } => "bb:to:restore",
            BasketballAction::ShotClockStart => "bb:shot:start",
            BasketballAction::ShotClockStop => "bb:shot:stop",
            BasketballAction::ShotClockFull => "bb:shot:reset24",
            BasketballAction::ShotClockShort => "bb:shot:reset14",
            BasketballAction::ShotClockSet { .. } => "bb:shot:set",
        }
    }

    fn apply_meta(&self, meta: &mut BasketballMeta) {
        match *self {
            BasketballAction::Score { .. } | BasketballAction::ScoreUndo { .. } => {}
            BasketballAction::Foul { side, index } => {
                let Some(player) = meta.roster[side].player_mut(index) else {
                    return;
                };
                player.fouls = player.fouls.saturating_add(1);
                meta.team_fouls[side] = meta.team_fouls[side].saturating_add(1);
            }
            BasketballAction::FoulUndo { side, index } => {
                let Some(player) = meta.roster[side].player_mut(index) else {
                    return;
                };
                if player.fouls == 0 {
                    return;
                }
                player.fouls -= 1;
                meta.team_fouls[side] = meta.team_fouls[side].saturating_sub(1);
            }
            BasketballAction::ResetTeamFouls => meta.team_fouls.for_each_mut(|_, fouls| *fouls = 0),
            BasketballAction::Timeout { side } => {
                meta.timeouts_left[side] = meta.timeouts_left[side].saturating_sub(1);
            }
            BasketballAction::TimeoutRestore { side } => {
                meta.timeouts_left[side] = meta.timeouts_left[side]
                    .saturating_add(1)
                    .min(EngineConfig::BASKETBALL_MAX_TIMEOUTS);
            }
            BasketballAction::ShotClockStart => meta.shot_clock.running = true,
            BasketballAction::ShotClockStop => meta.shot_clock.running = false,
            BasketballAction::ShotClockFull => meta.shot_clock.ms = EngineConfig::SHOT_CLOCK_FULL_MS,
            BasketballAction::ShotClockShort => {
                meta.shot_clock.ms = EngineConfig::SHOT_CLOCK_SHORT_MS
            }
            BasketballAction::ShotClockSet { ms } => meta.shot_clock.ms = ms,
        }
    }
}

impl ActionTransition for BasketballAction {
    fn apply(&self, state: &mut MatchState) {
        match *self {
            BasketballAction::Score { side, points } => {
                StateReducer::new(state).score().add(side, points)
            }
            BasketballAction::ScoreUndo { side, points } => {
                StateReducer::new(state).score().subtract(side, points)
            }
            _ => {
                if let Some(meta) = state.meta.basketball_mut() {
                    self.apply_meta(meta);
                }
            }
        }
    }
}
