use super::Countdown;
use crate::config::EngineConfig;
use crate::state::PerSide;

/// Two-minute exclusion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Suspension {
    pub remaining_ms: u64,
}

impl Suspension {
    pub const fn from_minutes(minutes: u32) -> Self {
        Self {
            remaining_ms: EngineConfig::minutes_to_ms(minutes),
        }
    }
}

impl Countdown for Suspension {
    fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    fn remaining_ms_mut(&mut self) -> &mut u64 {
        &mut self.remaining_ms
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct HandballMeta {
    /// Timeouts taken per side.
    pub timeouts: PerSide<u32>,
    pub max_timeouts_per_team: u32,
    /// Active exclusions per side, oldest first.
    pub suspensions: PerSide<Vec<Suspension>>,
}

impl Default for HandballMeta {
    fn default() -> Self {
        Self {
            timeouts: PerSide::default(),
            max_timeouts_per_team: EngineConfig::HANDBALL_MAX_TIMEOUTS,
            suspensions: PerSide::default(),
        }
    }
}
