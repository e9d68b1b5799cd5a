//! `{ type, payload }` wire form of actions.
//!
//! Operators send loosely typed envelopes. Parsing is lenient: unknown types
//! and payloads of the wrong shape yield `Ok(None)` and the reducer leaves the
//! state alone. Missing payload fields fall back to the documented defaults
//! (`team` is home, `amount` is 1, ...).

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::action::{
    Action, ActionError, BasketballAction, ClockAction, FieldHockeyAction, FootballAction,
    HandballAction, IceHockeyAction, MatchAction, ScoreAction, VolleyballAction,
};
use crate::config::EngineConfig;
use crate::engine::reduce;
use crate::sport::Sport;
use crate::state::{CardColor, MatchState, ShotOutcome, Side};

/// Untyped action as it travels between operator and engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionEnvelope {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl ActionEnvelope {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: None,
        }
    }

    pub fn with_payload(kind: impl Into<String>, payload: Value) -> Self {
        Self {
            kind: kind.into(),
            payload: Some(payload),
        }
    }

    /// Parses the envelope into a typed action.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::UnknownSport`] when `sport:set` names a sport
    /// with no profile.
    pub fn parse(&self) -> Result<Option<Action>, ActionError> {
        Action::from_envelope(self)
    }
}

impl From<&Action> for ActionEnvelope {
    fn from(action: &Action) -> Self {
        Self {
            kind: action.type_name().to_owned(),
            payload: payload_of(action),
        }
    }
}

impl From<Action> for ActionEnvelope {
    fn from(action: Action) -> Self {
        Self::from(&action)
    }
}

/// Parses `envelope` and reduces it against `state`.
///
/// Ignored envelopes return an unchanged clone.
pub fn reduce_envelope(
    state: &MatchState,
    envelope: &ActionEnvelope,
) -> Result<MatchState, ActionError> {
    Ok(match Action::from_envelope(envelope)? {
        Some(action) => reduce(state, &action),
        None => state.clone(),
    })
}

// ===== payload shapes =====

fn default_points() -> u32 {
    EngineConfig::BASKETBALL_DEFAULT_POINTS
}

fn default_minutes() -> u32 {
    EngineConfig::DEFAULT_SUSPENSION_MINUTES
}

fn default_football_color() -> CardColor {
    CardColor::Yellow
}

fn default_field_hockey_color() -> CardColor {
    CardColor::Green
}

#[derive(Deserialize)]
struct TeamPayload {
    #[serde(default)]
    team: Side,
}

#[derive(Deserialize)]
struct AmountPayload {
    #[serde(default)]
    team: Side,
    #[serde(default)]
    amount: Option<u32>,
}

impl AmountPayload {
    /// Missing, null and zero amounts all count as one point.
    fn amount(&self) -> u32 {
        self.amount.filter(|&amount| amount > 0).unwrap_or(1)
    }
}

#[derive(Deserialize)]
struct PointsPayload {
    #[serde(default)]
    team: Side,
    #[serde(default = "default_points")]
    points: u32,
}

#[derive(Deserialize)]
struct FootballCardPayload {
    #[serde(default)]
    team: Side,
    #[serde(default = "default_football_color")]
    color: CardColor,
}

#[derive(Deserialize)]
struct FieldHockeyCardPayload {
    #[serde(default)]
    team: Side,
    #[serde(default = "default_field_hockey_color")]
    color: CardColor,
}

#[derive(Deserialize)]
struct ExclusionPayload {
    #[serde(default)]
    team: Side,
    #[serde(default = "default_minutes")]
    minutes: u32,
}

#[derive(Deserialize)]
struct StoppagePayload {
    #[serde(default)]
    minutes: u32,
}

#[derive(Deserialize)]
struct FoulPayload {
    #[serde(default)]
    team: Side,
    #[serde(default)]
    index: usize,
}

#[derive(Deserialize)]
struct KickPayload {
    #[serde(default)]
    team: Side,
    #[serde(default)]
    res: Option<String>,
}

impl KickPayload {
    fn outcome(&self) -> ShotOutcome {
        match self.res.as_deref() {
            None | Some("G") => ShotOutcome::Goal,
            Some(_) => ShotOutcome::Miss,
        }
    }
}

#[derive(Deserialize)]
struct ClockSetPayload {
    #[serde(default, rename = "remainingMs")]
    remaining_ms: Option<f64>,
}

#[derive(Deserialize)]
struct ShotSetPayload {
    #[serde(default)]
    ms: Option<f64>,
}

#[derive(Deserialize)]
struct SportPayload {
    #[serde(default)]
    sport: Option<String>,
}

fn parse_payload<T: DeserializeOwned>(payload: Option<&Value>) -> Option<T> {
    match payload {
        None | Some(Value::Null) => T::deserialize(Value::Object(Map::new())).ok(),
        Some(value) => T::deserialize(value).ok(),
    }
}

/// Non-negative whole milliseconds from a JSON number.
fn clamp_ms(value: f64) -> u64 {
    value.max(0.0) as u64
}

impl Action {
    /// Turns an envelope into a typed action.
    ///
    /// Returns `Ok(None)` for unknown types and malformed payloads.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::UnknownSport`] when `sport:set` names a sport
    /// with no profile.
    pub fn from_envelope(envelope: &ActionEnvelope) -> Result<Option<Action>, ActionError> {
        let payload = envelope.payload.as_ref();

        let action = match envelope.kind.as_str() {
            // ===== match control =====
            "sport:set" => {
                let Some(SportPayload { sport }) = parse_payload(payload) else {
                    return Ok(None);
                };
                let sport = sport
                    .filter(|name| !name.is_empty())
                    .map(|name| Sport::parse(&name))
                    .transpose()
                    .map_err(|source| ActionError::UnknownSport {
                        action: envelope.kind.clone(),
                        source,
                    })?;
                Some(Action::Match(MatchAction::SetSport { sport }))
            }
            "basic:init" => Some(init(Sport::Basic)),
            "fb:init" => Some(init(Sport::Football)),
            "hb:init" => Some(init(Sport::Handball)),
            "bb:init" => Some(init(Sport::Basketball)),
            "hi:init" => Some(init(Sport::IceHockey)),
            "hf:init" => Some(init(Sport::FieldHockey)),
            "vb:init" => Some(init(Sport::Volleyball)),
            "match:reset" => Some(Action::Match(MatchAction::Reset)),

            // ===== clock =====
            "clock:start" => Some(Action::Clock(ClockAction::Start)),
            "clock:stop" => Some(Action::Clock(ClockAction::Stop)),
            "clock:set" => parse_payload::<ClockSetPayload>(payload)
                .and_then(|p| p.remaining_ms)
                .map(|ms| {
                    Action::Clock(ClockAction::Set {
                        remaining_ms: clamp_ms(ms),
                    })
                }),
            "clock:reset" => Some(Action::Clock(ClockAction::Reset)),
            "period:next" => Some(Action::Clock(ClockAction::NextPeriod)),
            "period:prev" => Some(Action::Clock(ClockAction::PrevPeriod)),

            // ===== generic score =====
            "score:inc" => parse_payload::<AmountPayload>(payload).map(|p| {
                Action::Score(ScoreAction::Increment {
                    side: p.team,
                    amount: p.amount(),
                })
            }),
            "score:dec" => parse_payload::<AmountPayload>(payload).map(|p| {
                Action::Score(ScoreAction::Decrement {
                    side: p.team,
                    amount: p.amount(),
                })
            }),

            // ===== football =====
            "fb:goal" => team(payload, |side| FootballAction::Goal { side }.into()),
            "fb:goal:dec" => team(payload, |side| FootballAction::GoalUndo { side }.into()),
            "fb:card" => parse_payload::<FootballCardPayload>(payload).map(|p| {
                Action::Football(FootballAction::Card {
                    side: p.team,
                    color: p.color,
                })
            }),
            "fb:card:dec" => parse_payload::<FootballCardPayload>(payload).map(|p| {
                Action::Football(FootballAction::CardUndo {
                    side: p.team,
                    color: p.color,
                })
            }),
            "fb:stoppage" => parse_payload::<StoppagePayload>(payload).map(|p| {
                Action::Football(FootballAction::SetStoppage { minutes: p.minutes })
            }),
            "fb:stoppage:inc" => Some(Action::Football(FootballAction::StoppageUp)),
            "fb:stoppage:dec" => Some(Action::Football(FootballAction::StoppageDown)),
            "fb:so:start" => Some(Action::Football(FootballAction::ShootoutStart)),
            "fb:so:record" => parse_payload::<KickPayload>(payload).map(|p| {
                Action::Football(FootballAction::ShootoutRecord {
                    side: p.team,
                    outcome: p.outcome(),
                })
            }),
            "fb:so:undo" => team(payload, |side| FootballAction::ShootoutUndo { side }.into()),
            "fb:so:end" => Some(Action::Football(FootballAction::ShootoutEnd)),

            // ===== handball =====
            "hb:goal" => team(payload, |side| HandballAction::Goal { side }.into()),
            "hb:goal:dec" => team(payload, |side| HandballAction::GoalUndo { side }.into()),
            "hb:timeout" => team(payload, |side| HandballAction::Timeout { side }.into()),
            "hb:timeout:dec" => team(payload, |side| HandballAction::TimeoutUndo { side }.into()),
            "hb:susp" => parse_payload::<ExclusionPayload>(payload).map(|p| {
                Action::Handball(HandballAction::Suspend {
                    side: p.team,
                    minutes: p.minutes,
                })
            }),
            "hb:susp:remove" => team(payload, |side| {
                HandballAction::RemoveLastSuspension { side }.into()
            }),

            // ===== basketball =====
            "bb:score" => parse_payload::<PointsPayload>(payload).map(|p| {
                Action::Basketball(BasketballAction::Score {
                    side: p.team,
                    points: p.points,
                })
            }),
            "bb:score:dec" => parse_payload::<PointsPayload>(payload).map(|p| {
                Action::Basketball(BasketballAction::ScoreUndo {
                    side: p.team,
                    points: p.points,
                })
            }),
            "bb:foul" => parse_payload::<FoulPayload>(payload).map(|p| {
                Action::Basketball(BasketballAction::Foul {
                    side: p.team,
                    index: p.index,
                })
            }),
            "bb:foul:dec" => parse_payload::<FoulPayload>(payload).map(|p| {
                Action::Basketball(BasketballAction::FoulUndo {
                    side: p.team,
                    index: p.index,
                })
            }),
            "bb:tf:reset" => Some(Action::Basketball(BasketballAction::ResetTeamFouls)),
            "bb:to" => team(payload, |side| BasketballAction::Timeout { side }.into()),
            "bb:to:restore" => team(payload, |side| {
                BasketballAction::TimeoutRestore { side }.into()
            }),
            "bb:shot:start" => Some(Action::Basketball(BasketballAction::ShotClockStart)),
            "bb:shot:stop" => Some(Action::Basketball(BasketballAction::ShotClockStop)),
            "bb:shot:reset24" => Some(Action::Basketball(BasketballAction::ShotClockFull)),
            "bb:shot:reset14" => Some(Action::Basketball(BasketballAction::ShotClockShort)),
            "bb:shot:set" => parse_payload::<ShotSetPayload>(payload).map(|p| {
                Action::Basketball(BasketballAction::ShotClockSet {
                    ms: p.ms.map_or(0, clamp_ms),
                })
            }),

            // ===== ice hockey =====
            "hi:goal" => team(payload, |side| IceHockeyAction::Goal { side }.into()),
            "hi:goal:dec" => team(payload, |side| IceHockeyAction::GoalUndo { side }.into()),
            "hi:penalty" => parse_payload::<ExclusionPayload>(payload).map(|p| {
                Action::IceHockey(IceHockeyAction::Penalty {
                    side: p.team,
                    minutes: p.minutes,
                })
            }),
            "hi:penalty:remove" => team(payload, |side| {
                IceHockeyAction::RemoveLastPenalty { side }.into()
            }),

            // ===== field hockey =====
            "hf:goal" => team(payload, |side| FieldHockeyAction::Goal { side }.into()),
            "hf:goal:dec" => team(payload, |side| FieldHockeyAction::GoalUndo { side }.into()),
            "hf:card" => parse_payload::<FieldHockeyCardPayload>(payload).map(|p| {
                Action::FieldHockey(FieldHockeyAction::Card {
                    side: p.team,
                    color: p.color,
                })
            }),
            "hf:card:dec" => parse_payload::<FieldHockeyCardPayload>(payload).map(|p| {
                Action::FieldHockey(FieldHockeyAction::CardUndo {
                    side: p.team,
                    color: p.color,
                })
            }),

            // ===== volleyball =====
            "vb:point" => team(payload, |side| VolleyballAction::Point { side }.into()),
            "vb:point:dec" => team(payload, |side| VolleyballAction::PointUndo { side }.into()),
            "vb:serve" => team(payload, |side| VolleyballAction::Serve { side }.into()),
            "vb:timeout" => team(payload, |side| VolleyballAction::Timeout { side }.into()),
            "vb:timeout:dec" => team(payload, |side| {
                VolleyballAction::TimeoutUndo { side }.into()
            }),
            "vb:nextSet" => Some(Action::Volleyball(VolleyballAction::NextSet)),

            _ => None,
        };

        Ok(action)
    }
}

fn init(sport: Sport) -> Action {
    Action::Match(MatchAction::Init { sport })
}

fn team(payload: Option<&Value>, build: impl FnOnce(Side) -> Action) -> Option<Action> {
    parse_payload::<TeamPayload>(payload).map(|p| build(p.team))
}

fn payload_of(action: &Action) -> Option<Value> {
    let payload = match *action {
        Action::Match(MatchAction::SetSport { sport }) => {
            json!({ "sport": sport.map(Sport::as_str) })
        }
        Action::Clock(ClockAction::Set { remaining_ms }) => json!({ "remainingMs": remaining_ms }),
        Action::Score(ScoreAction::Increment { side, amount } | ScoreAction::Decrement { side, amount }) => {
            json!({ "team": side, "amount": amount })
        }
        Action::Football(
            FootballAction::Goal { side }
            | FootballAction::GoalUndo { side }
            | FootballAction::ShootoutUndo { side },
        )
        | Action::Handball(
            HandballAction::Goal { side }
            | HandballAction::GoalUndo { side }
            | HandballAction::Timeout { side }
            | HandballAction::TimeoutUndo { side }
            | HandballAction::RemoveLastSuspension { side },
        )
        | Action::Basketball(
            BasketballAction::Timeout { side } | BasketballAction::TimeoutRestore { side },
        )
        | Action::IceHockey(
            IceHockeyAction::Goal { side }
            | IceHockeyAction::GoalUndo { side }
            | IceHockeyAction::RemoveLastPenalty { side },
        )
        | Action::FieldHockey(
            FieldHockeyAction::Goal { side } | FieldHockeyAction::GoalUndo { side },
        )
        | Action::Volleyball(
            VolleyballAction::Point { side }
            | VolleyballAction::PointUndo { side }
            | VolleyballAction::Serve { side }
            | VolleyballAction::Timeout { side }
            | VolleyballAction::TimeoutUndo { side },
        ) => json!({ "team": side }),
        Action::Football(
            FootballAction::Card { side, color } | FootballAction::CardUndo { side, color },
        )
        | Action::FieldHockey(
            FieldHockeyAction::Card { side, color } | FieldHockeyAction::CardUndo { side, color },
        ) => json!({ "team": side, "color": color }),
        Action::Football(FootballAction::SetStoppage { minutes }) => json!({ "minutes": minutes }),
        Action::Football(FootballAction::ShootoutRecord { side, outcome }) => {
            json!({ "team": side, "res": outcome })
        }
        Action::Handball(HandballAction::Suspend { side, minutes })
        | Action::IceHockey(IceHockeyAction::Penalty { side, minutes }) => {
            json!({ "team": side, "minutes": minutes })
        }
        Action::Basketball(
            BasketballAction::Score { side, points } | BasketballAction::ScoreUndo { side, points },
        ) => json!({ "team": side, "points": points }),
        Action::Basketball(
            BasketballAction::Foul { side, index } | BasketballAction::FoulUndo { side, index },
        ) => json!({ "team": side, "index": index }),
        Action::Basketball(BasketballAction::ShotClockSet { ms }) => json!({ "ms": ms }),
        _ => return None,
    };
    Some(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::init_match_state;
    use crate::state::ScoreState;

    fn envelope(value: Value) -> ActionEnvelope {
        serde_json::from_value(value).unwrap()
    }

    fn parsed(value: Value) -> Option<Action> {
        Action::from_envelope(&envelope(value)).unwrap()
    }

    #[test]
    fn missing_payload_uses_defaults() {
        assert_eq!(
            parsed(json!({ "type": "score:inc" })),
            Some(Action::Score(ScoreAction::Increment {
                side: Side::Home,
                amount: 1,
            }))
        );
        assert_eq!(
            parsed(json!({ "type": "bb:score", "payload": { "team": "away" } })),
            Some(Action::Basketball(BasketballAction::Score {
                side: Side::Away,
                points: 2,
            }))
        );
        assert_eq!(
            parsed(json!({ "type": "hf:card", "payload": null })),
            Some(Action::FieldHockey(FieldHockeyAction::Card {
                side: Side::Home,
                color: CardColor::Green,
            }))
        );
        assert_eq!(
            parsed(json!({ "type": "fb:card" })),
            Some(Action::Football(FootballAction::Card {
                side: Side::Home,
                color: CardColor::Yellow,
            }))
        );
        assert_eq!(
            parsed(json!({ "type": "hi:penalty", "payload": { "team": "away" } })),
            Some(Action::IceHockey(IceHockeyAction::Penalty {
                side: Side::Away,
                minutes: 2,
            }))
        );
    }

    #[test]
    fn unknown_type_and_bad_payload_are_ignored() {
        assert_eq!(parsed(json!({ "type": "zz:unknown" })), None);
        assert_eq!(
            parsed(json!({ "type": "score:inc", "payload": { "team": "visitors" } })),
            None
        );
        assert_eq!(
            parsed(json!({ "type": "bb:foul", "payload": { "index": "three" } })),
            None
        );
        assert_eq!(parsed(json!({ "type": "fb:goal", "payload": 7 })), None);
    }

    #[test]
    fn unknown_sport_fails_loudly() {
        let err = Action::from_envelope(&envelope(
            json!({ "type": "sport:set", "payload": { "sport": "quidditch" } }),
        ))
        .unwrap_err();
        assert!(matches!(err, ActionError::UnknownSport { .. }));
    }

    #[test]
    fn sport_set_accepts_legacy_names_and_missing_sport() {
        assert_eq!(
            parsed(json!({ "type": "sport:set", "payload": { "sport": "basket" } })),
            Some(Action::Match(MatchAction::SetSport {
                sport: Some(Sport::Basketball),
            }))
        );
        assert_eq!(
            parsed(json!({ "type": "sport:set" })),
            Some(Action::Match(MatchAction::SetSport { sport: None }))
        );
    }

    #[test]
    fn clock_set_clamps_and_requires_value() {
        assert_eq!(
            parsed(json!({ "type": "clock:set", "payload": { "remainingMs": -500 } })),
            Some(Action::Clock(ClockAction::Set { remaining_ms: 0 }))
        );
        assert_eq!(
            parsed(json!({ "type": "clock:set", "payload": { "remainingMs": 1234.9 } })),
            Some(Action::Clock(ClockAction::Set { remaining_ms: 1234 }))
        );
        assert_eq!(parsed(json!({ "type": "clock:set", "payload": {} })), None);
    }

    #[test]
    fn shootout_result_other_than_goal_is_miss() {
        assert_eq!(
            parsed(json!({ "type": "fb:so:record", "payload": { "team": "away", "res": "X" } })),
            Some(Action::Football(FootballAction::ShootoutRecord {
                side: Side::Away,
                outcome: ShotOutcome::Miss,
            }))
        );
    }

    #[test]
    fn typed_action_converts_back_to_envelope() {
        let action = Action::Basketball(BasketballAction::Foul {
            side: Side::Away,
            index: 3,
        });
        let envelope = ActionEnvelope::from(&action);
        assert_eq!(envelope.kind, "bb:foul");
        assert_eq!(
            envelope.payload,
            Some(json!({ "team": "away", "index": 3 }))
        );
        assert_eq!(envelope.parse().unwrap(), Some(action));
        assert_eq!(ActionEnvelope::from(Action::Clock(ClockAction::Start)).payload, None);
    }

    #[test]
    fn reduce_envelope_ignores_noise() {
        let state = init_match_state("org:m1", Sport::Basic);
        let same = reduce_envelope(&state, &ActionEnvelope::new("nope")).unwrap();
        assert_eq!(same, state);

        let next = reduce_envelope(
            &state,
            &ActionEnvelope::with_payload("score:inc", json!({ "team": "away", "amount": 3 })),
        )
        .unwrap();
        assert_eq!(next.score, ScoreState::new(0, 3));
        assert_eq!(state.score, ScoreState::default());
    }

    #[test]
    fn zero_or_null_amount_scores_one() {
        for payload in [
            json!({ "team": "home", "amount": 0 }),
            json!({ "team": "home", "amount": null }),
            json!({ "team": "home" }),
        ] {
            let action = Action::from_envelope(&ActionEnvelope::with_payload("score:inc", payload))
                .unwrap();
            assert_eq!(
                action,
                Some(Action::Score(ScoreAction::Increment {
                    side: Side::Home,
                    amount: 1,
                }))
            );
        }

        let mut state = init_match_state("org:m1", Sport::Basic);
        state.score = ScoreState::new(2, 0);
        let next = reduce_envelope(
            &state,
            &ActionEnvelope::with_payload("score:dec", json!({ "team": "home", "amount": 0 })),
        )
        .unwrap();
        assert_eq!(next.score.home, 1);
    }
}
