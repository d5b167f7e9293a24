//! State machine errors.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors returned by [`StateMachine`](super::StateMachine) operations.
///
/// Every failing operation leaves the machine exactly as it was.
#[derive(Debug, Error)]
pub enum MachineError {
    /// No configuration was supplied at construction
    #[error("No configuration supplied")]
    Configuration,

    /// Configuration document could not be parsed
    #[error(transparent)]
    InvalidConfiguration(#[from] ConfigError),

    /// Target is not a configured state
    #[error("No such state '{state}'")]
    UnknownState { state: String },

    /// Current state has no transition for the event
    #[error("No transition for event '{event}' in state '{state}'")]
    UnknownTransition { state: String, event: String },
}
