use crate::config::EngineConfig;
use crate::state::{PerSide, Side};

/// One rostered player and their personal fouls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub num: u32,
    pub fouls: u32,
}

impl Player {
    pub const fn new(num: u32) -> Self {
        Self { num, fouls: 0 }
    }
}

/// Ordered list of players for one side.
///
/// Players are addressed by position. Every lookup goes through
/// [`Roster::player`] / [`Roster::player_mut`] so that switching to stable
/// player ids only touches this type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Roster(pub Vec<Player>);

impl Roster {
    pub fn from_numbers(numbers: impl IntoIterator<Item = u32>) -> Self {
        Self(numbers.into_iter().map(Player::new).collect())
    }

    pub fn player(&self, index: usize) -> Option<&Player> {
        self.0.get(index)
    }

    pub fn player_mut(&mut self, index: usize) -> Option<&mut Player> {
        self.0.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.0.iter()
    }
}

/// 24-second possession clock, independent of the game clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotClock {
    pub ms: u64,
    pub running: bool,
}

impl Default for ShotClock {
    fn default() -> Self {
        Self {
            ms: EngineConfig::SHOT_CLOCK_FULL_MS,
            running: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BasketballMeta {
    pub foul_limit_per_player: u32,
    /// Team fouls in the current period.
    pub team_fouls: PerSide<u32>,
    pub bonus_threshold: u32,
    pub timeouts_left: PerSide<u32>,
    pub shot_clock: ShotClock,
    pub roster: PerSide<Roster>,
}

impl BasketballMeta {
    /// True once `side` has committed enough team fouls to put the opponent
    /// in the bonus.
    pub fn in_bonus(&self, side: Side) -> bool {
        self.team_fouls[side] >= self.bonus_threshold
    }

    /// Roster indices of players on `side` that reached the personal foul limit.
    pub fn fouled_out(&self, side: Side) -> Vec<usize> {
        self.roster[side]
            .iter()
            .enumerate()
            .filter(|(_, player)| player.fouls >= self.foul_limit_per_player)
            .map(|(index, _)| index)
            .collect()
    }
}

impl Default for BasketballMeta {
    fn default() -> Self {
        Self {
            foul_limit_per_player: EngineConfig::BASKETBALL_FOUL_LIMIT,
            team_fouls: PerSide::default(),
            bonus_threshold: EngineConfig::BASKETBALL_BONUS_THRESHOLD,
            timeouts_left: PerSide::splat(EngineConfig::BASKETBALL_MAX_TIMEOUTS),
            shot_clock: ShotClock::default(),
            roster: PerSide::new(
                Roster::from_numbers(4..=8),
                Roster::from_numbers(9..=13),
            ),
        }
    }
}
