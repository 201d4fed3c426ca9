//=========================================================================
// Errors
//=========================================================================
//
// Error types surfaced by configuration validation and sequencing.
//
// Configuration problems are reported before playback starts. During
// playback the only failure is an invalid transition signal, which halts
// advancement.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

//=== ConfigError =========================================================

/// Presentation data rejected at load time.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The presentation document could not be parsed.
    Malformed(String),

    /// The route has no entries.
    EmptyRoute,

    /// A route entry names an action kind that does not exist.
    UnknownAction { index: usize, name: String },

    /// A route entry's args do not fit its action kind.
    InvalidArgs {
        index: usize,
        action: String,
        reason: String,
    },

    /// A route entry refers to a destination that is not defined.
    UnknownDestination { index: usize, name: String },

    /// A destination definition is malformed.
    InvalidDestination { name: String, reason: String },

    /// A wrap flag outside `{-1, 0, 1}`.
    InvalidWrapFlag(i64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(reason) => write!(f, "Malformed presentation: {}", reason),
            Self::EmptyRoute => write!(f, "Route has no entries"),
            Self::UnknownAction { index, name } => {
                write!(f, "Route entry {}: unknown action '{}'", index, name)
            }
            Self::InvalidArgs { index, action, reason } => {
                write!(f, "Route entry {} ({}): invalid args: {}", index, action, reason)
            }
            Self::UnknownDestination { index, name } => {
                write!(f, "Route entry {}: unknown destination '{}'", index, name)
            }
            Self::InvalidDestination { name, reason } => {
                write!(f, "Destination '{}' is invalid: {}", name, reason)
            }
            Self::InvalidWrapFlag(value) => {
                write!(f, "Wrap flag must be -1, 0 or 1, got {}", value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

//=== StageError ==========================================================

/// Failures of the action sequencer.
#[derive(Debug, Clone, PartialEq)]
pub enum StageError {
    /// A transition signal other than `next` / `prev`.
    InvalidTransition(String),

    /// An action asked for a destination that was never loaded.
    UnknownDestination(String),

    /// An action was initialised with args meant for another kind.
    MismatchedArgs { action: &'static str, expected: &'static str },

    /// The presentation failed validation.
    Config(ConfigError),
}

impl fmt::Display for StageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTransition(signal) => write!(f, "Unknown transition: {}", signal),
            Self::UnknownDestination(name) => write!(f, "Unknown destination: {}", name),
            Self::MismatchedArgs { action, expected } => {
                write!(f, "Action '{}' expects {} args", action, expected)
            }
            Self::Config(e) => write!(f, "Invalid presentation: {}", e),
        }
    }
}

impl std::error::Error for StageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for StageError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
