use super::Countdown;
use crate::config::EngineConfig;
use crate::state::PerSide;

/// Minor (2') or major (5') penalty served in the box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct IcePenalty {
    pub minutes: u32,
    pub remaining_ms: u64,
}

impl IcePenalty {
    pub const fn new(minutes: u32) -> Self {
        Self {
            minutes,
            remaining_ms: EngineConfig::minutes_to_ms(minutes),
        }
    }
}

impl Countdown for IcePenalty {
    fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    fn remaining_ms_mut(&mut self) -> &mut u64 {
        &mut self.remaining_ms
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IceHockeyMeta {
    pub penalties: PerSide<Vec<IcePenalty>>,
}
