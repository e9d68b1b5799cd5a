use crate::config::EngineConfig;
use crate::engine::reducer::StateReducer;
use crate::state::{Countdown, MatchState, SportMeta};

/// What a single tick step changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// The main clock reached zero on this step.
    pub clock_expired: bool,
    /// The basketball shot clock reached zero on this step.
    pub shot_clock_expired: bool,
    /// Exclusion entries that ran out and were removed.
    pub released: usize,
}

impl TickOutcome {
    pub fn is_quiet(&self) -> bool {
        *self == Self::default()
    }
}

pub(super) fn advance(state: &mut MatchState) -> TickOutcome {
    let step = EngineConfig::TICK_MS;
    let mut outcome = TickOutcome {
        clock_expired: StateReducer::new(state).clock().advance(step),
        ..TickOutcome::default()
    };

    match &mut state.meta {
        SportMeta::Basketball(meta) => {
            let shot = &mut meta.shot_clock;
            if shot.running {
                shot.ms = shot.ms.saturating_sub(step);
                if shot.ms == 0 {
                    shot.running = false;
                    outcome.shot_clock_expired = true;
                }
            }
        }
        SportMeta::Handball(meta) => {
            meta.suspensions
                .for_each_mut(|_, entries| outcome.released += decay(entries, step));
        }
        SportMeta::IceHockey(meta) => {
            meta.penalties
                .for_each_mut(|_, entries| outcome.released += decay(entries, step));
        }
        SportMeta::FieldHockey(meta) => {
            meta.suspensions
                .for_each_mut(|_, entries| outcome.released += decay(entries, step));
        }
        SportMeta::Basic | SportMeta::Football(_) | SportMeta::Volleyball(_) => {}
    }

    outcome
}

/// Counts every entry down by `step_ms` and drops the ones that reached zero,
/// keeping the order of the rest. Returns how many were dropped.
pub fn decay<T: Countdown>(entries: &mut Vec<T>, step_ms: u64) -> usize {
    let before = entries.len();
    entries.retain_mut(|entry| {
        let remaining = entry.remaining_ms_mut();
        *remaining = remaining.saturating_sub(step_ms);
        *remaining > 0
    });
    before - entries.len()
}
