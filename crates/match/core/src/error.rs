//! Common error infrastructure for match-core.
//!
//! The reducer and the tick function are total: they clamp instead of failing.
//! Errors only exist at the boundaries where untyped input (sport names,
//! action envelopes) is turned into engine types. Domain errors live next to
//! the code that raises them ([`crate::sport::SportError`],
//! [`crate::action::ActionError`]) and implement [`EngineError`].

/// Severity level of an error, used for categorization and logging priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// A caller handed the engine something no correct caller produces.
    ///
    /// Examples: an unrecognized sport identifier.
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates a bug in the caller.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Implemented by every error match-core returns.
///
/// Severity is decided by who is at fault, not by impact.
pub trait EngineError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier for logs. Defaults to the type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
