/// Engine constants shared by the reducer, the tick function and the profiles.
///
/// The engine has no runtime-tunable knobs; everything here is a rule of the
/// game or a fixed property of the tick model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct EngineConfig;

impl EngineConfig {
    // ===== tick model =====
    /// Length of one tick step in milliseconds.
    pub const TICK_MS: u64 = 100;

    // ===== clock =====
    pub const MS_PER_SECOND: u64 = 1_000;
    pub const MS_PER_MINUTE: u64 = 60 * Self::MS_PER_SECOND;
    pub const FIRST_PERIOD: u32 = 1;

    // ===== basketball =====
    pub const SHOT_CLOCK_FULL_MS: u64 = 24_000;
    pub const SHOT_CLOCK_SHORT_MS: u64 = 14_000;
    pub const BASKETBALL_MAX_TIMEOUTS: u32 = 5;
    pub const BASKETBALL_BONUS_THRESHOLD: u32 = 5;
    pub const BASKETBALL_FOUL_LIMIT: u32 = 5;
    pub const BASKETBALL_DEFAULT_POINTS: u32 = 2;

    // ===== handball =====
    pub const HANDBALL_MAX_TIMEOUTS: u32 = 3;

    // ===== exclusions =====
    pub const DEFAULT_SUSPENSION_MINUTES: u32 = 2;
    pub const GREEN_CARD_MINUTES: u32 = 2;
    pub const YELLOW_CARD_MINUTES: u32 = 5;

    // ===== volleyball =====
    pub const VOLLEYBALL_BEST_OF: u32 = 5;
    pub const VOLLEYBALL_POINTS_TO_WIN: u32 = 25;
    pub const VOLLEYBALL_TIE_BREAK_POINTS: u32 = 15;
    pub const VOLLEYBALL_WIN_BY: u32 = 2;
    pub const VOLLEYBALL_MAX_TIMEOUTS: u32 = 2;

    /// Converts whole minutes to milliseconds, saturating on overflow.
    pub const fn minutes_to_ms(minutes: u32) -> u64 {
        (minutes as u64).saturating_mul(Self::MS_PER_MINUTE)
    }
}
