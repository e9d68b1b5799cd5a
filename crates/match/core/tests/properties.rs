use match_core::{
    Action, ActionEnvelope, MatchState, ScoreState, Side, Sport, SportMeta, init_match_state,
    reduce, reduce_envelope, tick,
};
use serde_json::{Value, json};
use strum::IntoEnumIterator;

fn send(state: &MatchState, kind: &str, payload: Value) -> MatchState {
    reduce_envelope(state, &ActionEnvelope::with_payload(kind, payload))
        .expect("envelope should parse")
}

fn send_bare(state: &MatchState, kind: &str) -> MatchState {
    reduce_envelope(state, &ActionEnvelope::new(kind)).expect("envelope should parse")
}

// ================================================================
// Decrements floor at zero
// ================================================================

#[test]
fn decrements_never_go_negative() {
    let cases: [(Sport, &str, Value); 9] = [
        (Sport::Basic, "score:dec", json!({ "team": "away", "amount": 5 })),
        (Sport::Football, "fb:goal:dec", json!({ "team": "home" })),
        (Sport::Football, "fb:card:dec", json!({ "team": "away", "color": "red" })),
        (Sport::Football, "fb:stoppage:dec", json!({})),
        (Sport::Handball, "hb:timeout:dec", json!({ "team": "away" })),
        (Sport::Basketball, "bb:score:dec", json!({ "team": "home", "points": 3 })),
        (Sport::Basketball, "bb:foul:dec", json!({ "team": "home", "index": 0 })),
        (Sport::FieldHockey, "hf:card:dec", json!({ "team": "home", "color": "yellow" })),
        (Sport::Volleyball, "vb:timeout:dec", json!({ "team": "home" })),
    ];

    for (sport, kind, payload) in cases {
        let state = init_match_state("org:props", sport);
        let next = send(&state, kind, payload);
        assert_eq!(next, state, "{kind} on a fresh {sport} match must clamp");
    }

    let state = init_match_state("org:props", Sport::Basic);
    let state = send(&state, "score:inc", json!({ "team": "away", "amount": 2 }));
    let state = send(&state, "score:dec", json!({ "team": "away", "amount": 5 }));
    assert_eq!(state.score, ScoreState::new(0, 0));
}

#[test]
fn period_never_drops_below_one() {
    let mut state = init_match_state("org:props", Sport::IceHockey);
    for _ in 0..3 {
        state = send_bare(&state, "period:prev");
    }
    assert_eq!(state.clock.period, 1);
}

// ================================================================
// Capped increments
// ================================================================

#[test]
fn capped_counters_hold_their_maximum() {
    let mut handball = init_match_state("org:props", Sport::Handball);
    let mut volleyball = init_match_state("org:props", Sport::Volleyball);
    let mut basketball = init_match_state("org:props", Sport::Basketball);

    for _ in 0..20 {
        handball = send(&handball, "hb:timeout", json!({ "team": "home" }));
        volleyball = send(&volleyball, "vb:timeout", json!({ "team": "away" }));
        basketball = send(&basketball, "bb:to:restore", json!({ "team": "home" }));
    }

    assert_eq!(handball.meta.handball().unwrap().timeouts.home, 3);
    assert_eq!(volleyball.meta.volleyball().unwrap().timeouts.away, 2);
    assert_eq!(basketball.meta.basketball().unwrap().timeouts_left.home, 5);

    for _ in 0..20 {
        basketball = send(&basketball, "bb:to", json!({ "team": "home" }));
    }
    assert_eq!(basketball.meta.basketball().unwrap().timeouts_left.home, 0);
}

// ================================================================
// Tick
// ================================================================

#[test]
fn stopped_clock_does_not_move() {
    for sport in Sport::iter() {
        let state = init_match_state("org:props", sport);
        assert_eq!(
            tick(&state).clock.remaining_ms,
            state.clock.remaining_ms,
            "{sport}"
        );
    }
}

#[test]
fn running_clock_stops_exactly_at_zero() {
    let state = init_match_state("org:props", Sport::Basic);
    let state = send(&state, "clock:set", json!({ "remainingMs": 1000 }));
    let mut state = send_bare(&state, "clock:start");

    for step in 1..=10 {
        state = tick(&state);
        if step < 10 {
            assert!(state.clock.running, "still running after step {step}");
        }
    }
    assert_eq!(state.clock.remaining_ms, 0);
    assert!(!state.clock.running);

    for _ in 0..5 {
        state = tick(&state);
        assert_eq!(state.clock.remaining_ms, 0);
        assert!(!state.clock.running);
    }
}

#[test]
fn short_suspension_is_gone_after_two_ticks() {
    let mut state = init_match_state("org:props", Sport::Handball);
    state
        .meta
        .handball_mut()
        .unwrap()
        .suspensions
        .home
        .push(match_core::Suspension { remaining_ms: 200 });

    let once = tick(&state);
    assert_eq!(once.meta.handball().unwrap().suspensions.home.len(), 1);
    let twice = tick(&once);
    assert!(twice.meta.handball().unwrap().suspensions.home.is_empty());
}

// ================================================================
// Inverse actions
// ================================================================

#[test]
fn football_card_round_trip() {
    let state = init_match_state("org:props", Sport::Football);
    let carded = send(&state, "fb:card", json!({ "team": "home", "color": "yellow" }));
    assert_eq!(carded.meta.football().unwrap().cards.home.yellow, 1);

    let restored = send(&carded, "fb:card:dec", json!({ "team": "home", "color": "yellow" }));
    assert_eq!(
        restored.meta.football().unwrap().cards.home.yellow,
        state.meta.football().unwrap().cards.home.yellow
    );
}

#[test]
fn handball_suspension_remove_is_last_in_first_out() {
    let state = init_match_state("org:props", Sport::Handball);
    let state = send(&state, "hb:susp", json!({ "team": "away", "minutes": 2 }));
    let state = send(&state, "hb:susp", json!({ "team": "away", "minutes": 5 }));
    let state = send(&state, "hb:susp:remove", json!({ "team": "away" }));

    let remaining: Vec<u64> = state.meta.handball().unwrap().suspensions.away
        .iter()
        .map(|s| s.remaining_ms)
        .collect();
    assert_eq!(remaining, vec![120_000]);
}

// ================================================================
// Sport switch
// ================================================================

#[test]
fn sport_switch_preserves_score() {
    let state = init_match_state("org:props", Sport::Basic);
    let scored = send(&state, "score:inc", json!({ "team": "home" }));
    let switched = send(&scored, "sport:set", json!({ "sport": "football" }));

    assert_eq!(switched.score.home, scored.score.home);
    assert_eq!(switched.sport, Sport::Football);
    assert_eq!(
        switched.meta,
        init_match_state("org:props", Sport::Football).meta
    );
    assert_eq!(switched.clock.duration_sec, 45 * 60);
}

#[test]
fn unknown_sport_is_an_error_not_a_default() {
    let state = init_match_state("org:props", Sport::Basic);
    let result = reduce_envelope(
        &state,
        &ActionEnvelope::with_payload("sport:set", json!({ "sport": "curling" })),
    );
    assert!(result.is_err());
}

// ================================================================
// Volleyball set completion
// ================================================================

#[test]
fn volleyball_set_needs_two_point_margin() {
    let mut state = init_match_state("org:props", Sport::Volleyball);
    state.score = ScoreState::new(25, 23);
    let closed = send_bare(&state, "vb:nextSet");

    let meta = closed.meta.volleyball().unwrap();
    assert_eq!(meta.sets_won.home, 1);
    assert_eq!(meta.current_set, 2);
    assert_eq!(closed.score, ScoreState::new(0, 0));

    let mut state = init_match_state("org:props", Sport::Volleyball);
    state.score = ScoreState::new(25, 24);
    let unchanged = send_bare(&state, "vb:nextSet");
    assert_eq!(unchanged.score, state.score);
    assert_eq!(
        unchanged.meta.volleyball().unwrap().sets_won,
        state.meta.volleyball().unwrap().sets_won
    );
}

// ================================================================
// Basketball fouls
// ================================================================

#[test]
fn basketball_foul_and_team_reset() {
    let state = init_match_state("org:props", Sport::Basketball);
    let fouled = send(&state, "bb:foul", json!({ "team": "home", "index": 2 }));

    let meta = fouled.meta.basketball().unwrap();
    assert_eq!(meta.roster.home.player(2).unwrap().fouls, 1);
    assert_eq!(meta.team_fouls.home, 1);

    let reset = send_bare(&fouled, "bb:tf:reset");
    let meta = reset.meta.basketball().unwrap();
    assert_eq!(meta.team_fouls.home, 0);
    assert_eq!(meta.team_fouls.away, 0);
    assert_eq!(meta.roster.home.player(2).unwrap().fouls, 1);
}

// ================================================================
// Cross-sport isolation
// ================================================================

#[test]
fn meta_actions_for_other_sports_are_noops() {
    let state = init_match_state("org:props", Sport::Volleyball);
    let kinds = [
        ("fb:card", json!({ "team": "home" })),
        ("hb:susp", json!({ "team": "home" })),
        ("bb:foul", json!({ "team": "home" })),
        ("bb:shot:start", json!({})),
        ("hi:penalty", json!({ "team": "away" })),
        ("hf:card", json!({ "team": "away" })),
    ];
    for (kind, payload) in kinds {
        assert_eq!(send(&state, kind, payload), state, "{kind}");
    }

    // Score-only actions apply whatever the sport.
    let scored = send(&state, "fb:goal", json!({ "team": "away" }));
    assert_eq!(scored.score, ScoreState::new(0, 1));
    assert!(matches!(scored.meta, SportMeta::Volleyball(_)));
}

#[test]
fn state_survives_json_round_trip() {
    let state = init_match_state("org:props", Sport::Basketball);
    let state = send(&state, "bb:foul", json!({ "team": "away", "index": 1 }));
    let action: Action = Action::from_envelope(&ActionEnvelope::with_payload(
        "bb:shot:set",
        json!({ "ms": 9000 }),
    ))
    .unwrap()
    .unwrap();
    let state = reduce(&state, &action);

    let json = serde_json::to_string(&state).unwrap();
    let decoded: MatchState = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, state);
    assert_eq!(decoded.meta.basketball().unwrap().roster[Side::Away].player(1).unwrap().fouls, 1);
}
