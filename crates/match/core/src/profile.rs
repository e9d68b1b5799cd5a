//! Sport profile registry.
//!
//! Pure lookup tables mapping a [`Sport`] to its default clock and metadata.
//! [`init_match_state`] composes them and is the only constructor of
//! [`MatchState`].

use crate::sport::{Sport, SportError};
use crate::state::{
    BasketballMeta, ClockState, FieldHockeyMeta, FootballMeta, HandballMeta, IceHockeyMeta,
    MatchState, ScoreState, SportMeta, VolleyballMeta,
};

/// Regulation period length in seconds. No overtime modeling.
const fn period_seconds(sport: Sport) -> u32 {
    match sport {
        Sport::Football => 45 * 60,
        Sport::Handball => 30 * 60,
        Sport::Basketball => 10 * 60,
        Sport::IceHockey => 20 * 60,
        Sport::FieldHockey => 15 * 60,
        Sport::Volleyball => 0,
        Sport::Basic => 10 * 60,
    }
}

/// Stopped clock at the start of period 1 with the sport's regulation length.
pub const fn default_clock(sport: Sport) -> ClockState {
    ClockState::with_duration(period_seconds(sport))
}

/// Fresh metadata variant for `sport`.
pub fn default_meta(sport: Sport) -> SportMeta {
    match sport {
        Sport::Basic => SportMeta::Basic,
        Sport::Football => SportMeta::Football(FootballMeta::default()),
        Sport::Handball => SportMeta::Handball(HandballMeta::default()),
        Sport::Basketball => SportMeta::Basketball(BasketballMeta::default()),
        Sport::IceHockey => SportMeta::IceHockey(IceHockeyMeta::default()),
        Sport::FieldHockey => SportMeta::FieldHockey(FieldHockeyMeta::default()),
        Sport::Volleyball => SportMeta::Volleyball(VolleyballMeta::default()),
    }
}

/// Creates the default state for `sport` under `match_key`.
pub fn init_match_state(match_key: impl Into<String>, sport: Sport) -> MatchState {
    MatchState {
        match_id: match_key.into(),
        sport,
        clock: default_clock(sport),
        score: ScoreState::default(),
        meta: default_meta(sport),
    }
}

/// Like [`init_match_state`] but takes an untyped sport identifier.
///
/// # Errors
///
/// Returns [`SportError::Unknown`] if `sport` names no profile. This is a
/// caller bug and should not be recovered from with a default.
pub fn init_match_state_named(
    match_key: impl Into<String>,
    sport: &str,
) -> Result<MatchState, SportError> {
    let sport = Sport::parse(sport)?;
    Ok(init_match_state(match_key, sport))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn default_durations_match_regulation() {
        let expected = [
            (Sport::Basic, 600),
            (Sport::Football, 2700),
            (Sport::Handball, 1800),
            (Sport::Basketball, 600),
            (Sport::IceHockey, 1200),
            (Sport::FieldHockey, 900),
            (Sport::Volleyball, 0),
        ];
        for (sport, seconds) in expected {
            let clock = default_clock(sport);
            assert_eq!(clock.duration_sec, seconds, "{sport}");
            assert_eq!(clock.remaining_ms, u64::from(seconds) * 1000, "{sport}");
            assert!(!clock.running);
            assert_eq!(clock.period, 1);
        }
    }

    #[test]
    fn meta_variant_matches_sport() {
        for sport in Sport::iter() {
            let state = init_match_state("org:m1", sport);
            assert_eq!(state.meta.sport(), sport);
            assert_eq!(state.sport, sport);
            assert_eq!(state.score, ScoreState::default());
        }
    }

    #[test]
    fn basketball_defaults() {
        let SportMeta::Basketball(meta) = default_meta(Sport::Basketball) else {
            panic!("expected basketball meta");
        };
        assert_eq!(meta.timeouts_left.home, 5);
        assert_eq!(meta.shot_clock.ms, 24_000);
        assert!(!meta.shot_clock.running);
        let numbers: Vec<u32> = meta.roster.home.iter().map(|p| p.num).collect();
        assert_eq!(numbers, vec![4, 5, 6, 7, 8]);
        assert_eq!(meta.roster.away.len(), 5);
        assert!(!meta.roster.away.is_empty());
    }

    #[test]
    fn named_constructor_rejects_unknown_sport() {
        assert!(init_match_state_named("org:m1", "quidditch").is_err());
        let state = init_match_state_named("org:m1", "hockey_ice").unwrap();
        assert_eq!(state.sport, Sport::IceHockey);
    }
}
