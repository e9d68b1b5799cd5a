use crate::config::EngineConfig;

/// Main match clock. Counts down from `duration_sec` to zero.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ClockState {
    /// Regulation length of one period in seconds (0 for untimed sports).
    pub duration_sec: u32,
    /// Time left in the current period. Never negative.
    pub remaining_ms: u64,
    pub running: bool,
    /// Current period, starting at 1.
    pub period: u32,
}

impl ClockState {
    /// Creates a stopped clock at the start of the first period.
    pub const fn with_duration(duration_sec: u32) -> Self {
        Self {
            duration_sec,
            remaining_ms: duration_sec as u64 * EngineConfig::MS_PER_SECOND,
            running: false,
            period: EngineConfig::FIRST_PERIOD,
        }
    }

    pub const fn is_expired(&self) -> bool {
        self.remaining_ms == 0
    }
}
