//! Internal-consistency faults in the state graph.

use derive_more::{Display, Error};
use tracing::instrument;

/// Raised when a state finds conversation data it cannot have reached
/// through valid transitions (for example a board missing mid-game).
///
/// User mistakes never produce this; they route to corrective states.
#[derive(Debug, Clone, Display, Error)]
#[display("State error: {} at {}:{}", message, file, line)]
pub struct StateError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StateError {
    /// Creates a new state error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
