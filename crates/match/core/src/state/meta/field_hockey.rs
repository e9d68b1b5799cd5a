use super::{CardColor, Countdown};
use crate::config::EngineConfig;
use crate::state::PerSide;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldHockeyCards {
    pub green: u32,
    pub yellow: u32,
    pub red: u32,
}

impl FieldHockeyCards {
    pub fn count_mut(&mut self, color: CardColor) -> &mut u32 {
        match color {
            CardColor::Green => &mut self.green,
            CardColor::Yellow => &mut self.yellow,
            CardColor::Red => &mut self.red,
        }
    }
}

/// Temporary suspension attached to a green or yellow card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FieldHockeySuspension {
    pub color: CardColor,
    pub remaining_ms: u64,
}

impl FieldHockeySuspension {
    /// Suspension carried by a card of `color`; red cards carry none.
    pub const fn for_card(color: CardColor) -> Option<Self> {
        let minutes = match color {
            CardColor::Green => EngineConfig::GREEN_CARD_MINUTES,
            CardColor::Yellow => EngineConfig::YELLOW_CARD_MINUTES,
            CardColor::Red => return None,
        };
        Some(Self {
            color,
            remaining_ms: EngineConfig::minutes_to_ms(minutes),
        })
    }
}

impl Countdown for FieldHockeySuspension {
    fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    fn remaining_ms_mut(&mut self) -> &mut u64 {
        &mut self.remaining_ms
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldHockeyMeta {
    pub cards: PerSide<FieldHockeyCards>,
    pub suspensions: PerSide<Vec<FieldHockeySuspension>>,
}
