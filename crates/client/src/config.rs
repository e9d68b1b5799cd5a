//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use match_core::MatchInfo;
use runtime::RuntimeConfig;

/// Everything the binary needs to start a match.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Match key, conventionally `org:match`.
    pub match_key: String,
    /// Sport identifier; parsed at startup and rejected if unknown.
    pub sport: String,
    pub info: MatchInfo,
    pub runtime: RuntimeConfig,
    pub logging: LogConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            match_key: "org:match".to_owned(),
            sport: "basic".to_owned(),
            info: MatchInfo::new("", "Home", "Away"),
            runtime: RuntimeConfig::default(),
            logging: LogConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `MATCH_KEY` - Match key (default: `org:match`)
    /// - `MATCH_SPORT` - Sport identifier (default: `basic`)
    /// - `MATCH_NAME` - Match title shown on displays (default: empty)
    /// - `HOME_NAME` / `AWAY_NAME` - Team names (default: `Home` / `Away`)
    /// - `LOG_TO_FILE` - Also write logs to a daily file (default: false)
    /// - `LOG_DIR` - Directory for log files (default: platform-specific)
    /// - `SCOREBOARD_*` - Runtime settings, see [`RuntimeConfig::from_env`]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(key) = env::var("MATCH_KEY") {
            config.match_key = key;
        }
        if let Ok(sport) = env::var("MATCH_SPORT") {
            config.sport = sport;
        }
        if let Ok(name) = env::var("MATCH_NAME") {
            config.info.name = name;
        }
        if let Ok(name) = env::var("HOME_NAME") {
            config.info.home_name = name;
        }
        if let Ok(name) = env::var("AWAY_NAME") {
            config.info.away_name = name;
        }

        config.runtime = RuntimeConfig::from_env();
        config.logging = LogConfig::from_env();

        config
    }
}

/// Where logs go besides stderr.
#[derive(Clone, Debug, Default)]
pub struct LogConfig {
    pub to_file: bool,
    pub dir: Option<PathBuf>,
}

impl LogConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(enable) = read_env::<bool>("LOG_TO_FILE") {
            config.to_file = enable;
        } else if env::var("LOG_TO_FILE").is_ok() {
            // Also accept just setting the variable without value as "true"
            config.to_file = true;
        }

        config.dir = env::var("LOG_DIR").ok().map(PathBuf::from);

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
