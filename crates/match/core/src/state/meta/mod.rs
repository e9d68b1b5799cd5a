//! Sport-specific match metadata.
//!
//! [`SportMeta`] is a tagged union with one variant per [`Sport`]. The reducer
//! and the tick function match on it exhaustively, so a new sport is a compile
//! error in every place that has to learn about it.
mod basketball;
mod field_hockey;
mod football;
mod handball;
mod ice_hockey;
mod volleyball;

pub use basketball::{BasketballMeta, Player, Roster, ShotClock};
pub use field_hockey::{FieldHockeyCards, FieldHockeyMeta, FieldHockeySuspension};
pub use football::{FootballCards, FootballMeta, ShootoutState, ShotOutcome};
pub use handball::{HandballMeta, Suspension};
pub use ice_hockey::{IceHockeyMeta, IcePenalty};
pub use volleyball::{TechnicalTimeout, VolleyballMeta};

use crate::sport::Sport;

/// Card colours used by football and field hockey.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CardColor {
    Green,
    Yellow,
    Red,
}

/// A timed exclusion that counts down with every tick and disappears at zero.
pub trait Countdown {
    fn remaining_ms(&self) -> u64;

    fn remaining_ms_mut(&mut self) -> &mut u64;
}

/// Metadata variant selected by the match's sport.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "sport", rename_all = "snake_case"))]
pub enum SportMeta {
    Basic,
    Football(FootballMeta),
    Handball(HandballMeta),
    Basketball(BasketballMeta),
    IceHockey(IceHockeyMeta),
    FieldHockey(FieldHockeyMeta),
    Volleyball(VolleyballMeta),
}

impl SportMeta {
    /// Sport this variant belongs to.
    pub const fn sport(&self) -> Sport {
        match self {
            SportMeta::Basic => Sport::Basic,
            SportMeta::Football(_) => Sport::Football,
            SportMeta::Handball(_) => Sport::Handball,
            SportMeta::Basketball(_) => Sport::Basketball,
            SportMeta::IceHockey(_) => Sport::IceHockey,
            SportMeta::FieldHockey(_) => Sport::FieldHockey,
            SportMeta::Volleyball(_) => Sport::Volleyball,
        }
    }

    pub fn football_mut(&mut self) -> Option<&mut FootballMeta> {
        match self {
            SportMeta::Football(meta) => Some(meta),
            _ => None,
        }
    }

    pub fn handball_mut(&mut self) -> Option<&mut HandballMeta> {
        match self {
            SportMeta::Handball(meta) => Some(meta),
            _ => None,
        }
    }

    pub fn basketball_mut(&mut self) -> Option<&mut BasketballMeta> {
        match self {
            SportMeta::Basketball(meta) => Some(meta),
            _ => None,
        }
    }

    pub fn ice_hockey_mut(&mut self) -> Option<&mut IceHockeyMeta> {
        match self {
            SportMeta::IceHockey(meta) => Some(meta),
            _ => None,
        }
    }

    pub fn field_hockey_mut(&mut self) -> Option<&mut FieldHockeyMeta> {
        match self {
            SportMeta::FieldHockey(meta) => Some(meta),
            _ => None,
        }
    }

    pub fn volleyball_mut(&mut self) -> Option<&mut VolleyballMeta> {
        match self {
            SportMeta::Volleyball(meta) => Some(meta),
            _ => None,
        }
    }

    pub fn football(&self) -> Option<&FootballMeta> {
        match self {
            SportMeta::Football(meta) => Some(meta),
            _ => None,
        }
    }

    pub fn handball(&self) -> Option<&HandballMeta> {
        match self {
            SportMeta::Handball(meta) => Some(meta),
            _ => None,
        }
    }

    pub fn basketball(&self) -> Option<&BasketballMeta> {
        match self {
            SportMeta::Basketball(meta) => Some(meta),
            _ => None,
        }
    }

    pub fn ice_hockey(&self) -> Option<&IceHockeyMeta> {
        match self {
            SportMeta::IceHockey(meta) => Some(meta),
            _ => None,
        }
    }

    pub fn field_hockey(&self) -> Option<&FieldHockeyMeta> {
        match self {
            SportMeta::FieldHockey(meta) => Some(meta),
            _ => None,
        }
    }

    pub fn volleyball(&self) -> Option<&VolleyballMeta> {
        match self {
            SportMeta::Volleyball(meta) => Some(meta),
            _ => None,
        }
    }
}
