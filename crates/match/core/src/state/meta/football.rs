use crate::state::{PerSide, Side};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FootballCards {
    pub yellow: u32,
    pub red: u32,
}

/// Result of one penalty kick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    #[cfg_attr(feature = "serde", serde(rename = "G"))]
    Goal,
    #[cfg_attr(feature = "serde", serde(rename = "M"))]
    Miss,
}

/// Penalty shootout sequences, one per side, in kick order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ShootoutState {
    pub in_progress: bool,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub kicks: PerSide<Vec<ShotOutcome>>,
}

impl ShootoutState {
    /// Fresh shootout with empty sequences.
    pub fn started() -> Self {
        Self {
            in_progress: true,
            kicks: PerSide::default(),
        }
    }

    pub fn goals(&self, side: Side) -> usize {
        self.kicks[side]
            .iter()
            .filter(|kick| **kick == ShotOutcome::Goal)
            .count()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FootballMeta {
    /// Announced stoppage time in minutes. Operator-set, never ticked.
    pub stoppage_min: u32,
    pub cards: PerSide<FootballCards>,
    pub shootout: ShootoutState,
}

impl FootballMeta {
    pub fn shootout_goals(&self, side: Side) -> usize {
        self.shootout.goals(side)
    }
}
