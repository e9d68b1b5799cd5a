//! Closed set of sports the engine knows how to score.

use core::str::FromStr;

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::{EngineError, ErrorSeverity};

/// Sport identifier selecting the clock profile and the metadata variant.
///
/// Parsing also accepts the short legacy spellings (`basket`, `hockey_ice`,
/// `hockey_field`) that older operator consoles still send.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Sport {
    #[default]
    Basic,
    Football,
    Handball,
    #[strum(to_string = "basketball", serialize = "basket")]
    #[cfg_attr(feature = "serde", serde(alias = "basket"))]
    Basketball,
    #[strum(to_string = "ice_hockey", serialize = "hockey_ice")]
    #[cfg_attr(feature = "serde", serde(alias = "hockey_ice"))]
    IceHockey,
    #[strum(to_string = "field_hockey", serialize = "hockey_field")]
    #[cfg_attr(feature = "serde", serde(alias = "hockey_field"))]
    FieldHockey,
    Volleyball,
}

impl Sport {
    /// Returns the canonical snake_case identifier.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Parses a sport identifier, failing loudly on anything unknown.
    pub fn parse(value: &str) -> Result<Self, SportError> {
        Self::from_str(value).map_err(|_| SportError::Unknown(value.to_owned()))
    }

    /// Returns true if this sport runs a game clock at all.
    pub fn is_timed(self) -> bool {
        !matches!(self, Sport::Volleyball)
    }
}

/// Raised when a sport identifier does not name a known profile.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SportError {
    #[error("unknown sport '{0}'")]
    Unknown(String),
}

impl EngineError for SportError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            SportError::Unknown(_) => "SPORT_UNKNOWN",
        }
    }
}
