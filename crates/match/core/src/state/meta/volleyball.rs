use crate::config::EngineConfig;
use crate::state::{PerSide, ScoreState, Side};

/// Automatic technical timeout configuration. Informational only.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TechnicalTimeout {
    pub enabled: bool,
    pub at_points: Vec<u32>,
}

impl Default for TechnicalTimeout {
    fn default() -> Self {
        Self {
            enabled: false,
            at_points: vec![8, 16],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct VolleyballMeta {
    pub current_set: u32,
    /// Odd number of sets in the series.
    pub best_of: u32,
    pub sets_won: PerSide<u32>,
    pub points_to_win: u32,
    pub tie_break_points: u32,
    pub win_by: u32,
    pub serve: Side,
    /// Timeouts taken in the current set.
    pub timeouts: PerSide<u32>,
    pub max_timeouts_per_set: u32,
    #[cfg_attr(feature = "serde", serde(rename = "technicalTO"))]
    pub technical_timeout: TechnicalTimeout,
}

impl VolleyballMeta {
    /// Sets a side needs to take the series.
    pub const fn sets_to_win(&self) -> u32 {
        self.best_of / 2 + 1
    }

    /// Points needed to close the current set.
    pub const fn set_target(&self) -> u32 {
        if self.current_set == self.best_of {
            self.tie_break_points
        } else {
            self.points_to_win
        }
    }

    /// Side that closes the current set with `score`, if the set is over.
    pub fn set_winner(&self, score: &ScoreState) -> Option<Side> {
        let leader = score.leader()?;
        let reached_target = score.get(leader) >= self.set_target();
        (reached_target && score.margin() >= self.win_by).then_some(leader)
    }

    /// Side that has won the series, if any.
    pub fn winner(&self) -> Option<Side> {
        Side::ALL
            .into_iter()
            .find(|side| self.sets_won[*side] >= self.sets_to_win())
    }
}

impl Default for VolleyballMeta {
    fn default() -> Self {
        Self {
            current_set: 1,
            best_of: EngineConfig::VOLLEYBALL_BEST_OF,
            sets_won: PerSide::default(),
            points_to_win: EngineConfig::VOLLEYBALL_POINTS_TO_WIN,
            tie_break_points: EngineConfig::VOLLEYBALL_TIE_BREAK_POINTS,
            win_by: EngineConfig::VOLLEYBALL_WIN_BY,
            serve: Side::Home,
            timeouts: PerSide::default(),
            max_timeouts_per_set: EngineConfig::VOLLEYBALL_MAX_TIMEOUTS,
            technical_timeout: TechnicalTimeout::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deciding_set_uses_tie_break_target() {
        let mut meta = VolleyballMeta::default();
        assert_eq!(meta.set_target(), 25);
        meta.current_set = 5;
        assert_eq!(meta.set_target(), 15);
    }

    #[test]
    fn set_needs_target_and_margin() {
        let meta = VolleyballMeta::default();
        assert_eq!(meta.set_winner(&ScoreState::new(25, 23)), Some(Side::Home));
        assert_eq!(meta.set_winner(&ScoreState::new(25, 24)), None);
        assert_eq!(meta.set_winner(&ScoreState::new(20, 10)), None);
        assert_eq!(meta.set_winner(&ScoreState::new(26, 28)), Some(Side::Away));
    }

    #[test]
    fn series_winner_after_three_sets() {
        let mut meta = VolleyballMeta::default();
        assert_eq!(meta.sets_to_win(), 3);
        meta.sets_won = PerSide::new(2, 3);
        assert_eq!(meta.winner(), Some(Side::Away));
    }
}
