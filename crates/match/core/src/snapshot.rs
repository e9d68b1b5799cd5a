//! Broadcast unit sent from the operator to displays.

use crate::state::MatchState;

/// Display names shown next to the score.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchInfo {
    pub name: String,
    pub home_name: String,
    pub away_name: String,
}

impl MatchInfo {
    pub fn new(
        name: impl Into<String>,
        home_name: impl Into<String>,
        away_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            home_name: home_name.into(),
            away_name: away_name.into(),
        }
    }
}

/// Full state plus presentation info, stamped with the publisher's wall clock.
///
/// Displays keep whichever snapshot arrived last; `timestamp` is informational.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub state: MatchState,
    pub info: MatchInfo,
    /// Milliseconds since the Unix epoch.
    #[cfg_attr(feature = "serde", serde(rename = "t", alias = "timestamp"))]
    pub timestamp: i64,
}

impl Snapshot {
    pub fn new(state: MatchState, info: MatchInfo, timestamp: i64) -> Self {
        Self {
            state,
            info,
            timestamp,
        }
    }
}

#[cfg(feature = "serde")]
impl Snapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;
    use crate::profile::init_match_state;
    use crate::sport::Sport;

    #[test]
    fn wire_shape_matches_broadcast_payload() {
        let snapshot = Snapshot::new(
            init_match_state("org:m1", Sport::Handball),
            MatchInfo::new("Final", "Lions", "Tigers"),
            1_700_000_000_000,
        );

        let value: serde_json::Value = serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(value["t"], 1_700_000_000_000_i64);
        assert_eq!(value["info"]["home_name"], "Lions");
        assert_eq!(value["state"]["matchId"], "org:m1");
        assert_eq!(value["state"]["clock"]["remainingMs"], 1_800_000);
        assert_eq!(value["state"]["meta"]["sport"], "handball");
        assert_eq!(value["state"]["meta"]["maxTimeoutsPerTeam"], 3);
    }

    #[test]
    fn accepts_long_timestamp_name() {
        let json = serde_json::json!({
            "state": init_match_state("org:m1", Sport::Basic),
            "info": { "name": "", "home_name": "A", "away_name": "B" },
            "timestamp": 42,
        });
        let snapshot = Snapshot::from_json(&json.to_string()).unwrap();
        assert_eq!(snapshot.timestamp, 42);
        assert_eq!(snapshot.info.away_name, "B");
    }
}
