//! Quiz error types
//!
//! Wrong answers and timeouts are game outcomes, not errors. What lives here:
//! - Dataset loading failures (I/O, JSON, duplicate codes)
//! - Events delivered in a state that forbids them

use std::path::PathBuf;
use thiserror::Error;

use super::machine::MachineState;

/// Errors produced by the quiz core
#[derive(Debug, Error)]
pub enum QuizError {
    /// The dataset file could not be read.
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset file is not a valid country list.
    #[error("failed to parse dataset {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Two records share the same flag code.
    #[error("duplicate country code in dataset: {0}")]
    DuplicateCode(String),

    /// The event is not accepted in the current state. Nothing was changed.
    #[error("event {event} ignored in state {state:?}")]
    InvalidTransition {
        event: &'static str,
        state: MachineState,
    },
}

impl QuizError {
    /// Returns `true` for contract violations the host can safely drop.
    pub fn is_ignorable(&self) -> bool {
        matches!(self, QuizError::InvalidTransition { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_transition_is_ignorable() {
        let err = QuizError::InvalidTransition {
            event: "submit",
            state: MachineState::Finished,
        };
        assert!(err.is_ignorable());
        assert_eq!(err.to_string(), "event submit ignored in state Finished");
    }

    #[test]
    fn test_duplicate_code_is_fatal() {
        let err = QuizError::DuplicateCode("ar".to_string());
        assert!(!err.is_ignorable());
        assert!(err.to_string().contains("ar"));
    }
}
