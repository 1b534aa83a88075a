//! Error taxonomy for the game core.
//!
//! None of these are fatal. Callers either drop the failed operation (empty
//! names, wrong phase) or log and continue without the resource (audio,
//! storage).

use std::fmt;

use crate::model::Phase;

#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    /// A command argument was rejected, e.g. an empty player name.
    InvalidInput {
        /// What was wrong with the input.
        reason: &'static str,
    },

    /// A lifecycle command arrived in a phase that does not accept it.
    InvalidPhase { expected: Phase, actual: Phase },

    /// An external resource (audio playback, storage write) refused to work.
    ResourceUnavailable {
        resource: &'static str,
        detail: String,
    },

    /// Persisted data could not be parsed.
    StorageCorrupt { key: String, detail: String },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidInput { reason } => write!(f, "invalid input: {}", reason),
            GameError::InvalidPhase { expected, actual } => write!(
                f,
                "command requires phase {:?} but game is {:?}",
                expected, actual
            ),
            GameError::ResourceUnavailable { resource, detail } => {
                write!(f, "{} unavailable: {}", resource, detail)
            }
            GameError::StorageCorrupt { key, detail } => {
                write!(f, "stored value under '{}' is corrupt: {}", key, detail)
            }
        }
    }
}

impl std::error::Error for GameError {}
