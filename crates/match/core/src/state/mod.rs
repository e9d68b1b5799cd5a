//! Authoritative match state representation.
//!
//! This module owns the data structures that describe one match: identity,
//! sport, clock, score and the sport-specific metadata. Callers clone or
//! serialize this state freely but evolve it exclusively through the engine.
mod clock;
pub mod meta;
mod score;
mod side;

pub use clock::ClockState;
pub use meta::{
    BasketballMeta, CardColor, Countdown, FieldHockeyCards, FieldHockeyMeta,
    FieldHockeySuspension, FootballCards, FootballMeta, HandballMeta, IceHockeyMeta, IcePenalty,
    Player, Roster, ShootoutState, ShotClock, ShotOutcome, SportMeta, Suspension,
    TechnicalTimeout, VolleyballMeta,
};
pub use score::ScoreState;
pub use side::{PerSide, Side};

use crate::sport::Sport;

/// Canonical snapshot of one match.
///
/// `meta` always holds the variant matching `sport`; the profile registry is
/// the only place that pairs them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MatchState {
    /// Opaque match key, conventionally `"org:match"`.
    pub match_id: String,
    pub sport: Sport,
    pub clock: ClockState,
    pub score: ScoreState,
    pub meta: SportMeta,
}

impl MatchState {
    /// Returns true once the main clock has run out.
    pub fn is_expired(&self) -> bool {
        self.sport.is_timed() && self.clock.is_expired()
    }
}
