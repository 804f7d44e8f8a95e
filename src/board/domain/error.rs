//! Error types for board domain construction.

use crate::task::domain::{ParseTaskFieldError, TaskId};
use thiserror::Error;

/// Errors returned while building board state from external input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The same task appeared twice in a working collection.
    #[error("duplicate task in working collection: {0}")]
    DuplicateTask(TaskId),

    /// A renderer registered a drop target with an unknown type tag.
    #[error("unknown drop target type '{kind}' for target '{id}'")]
    InvalidTargetType {
        /// Registered target identifier.
        id: String,
        /// Rejected type tag.
        kind: String,
    },

    /// A task drop target carried an identifier that is not a task id.
    #[error("invalid task identifier for drop target: {0}")]
    InvalidTaskTarget(String),

    /// A column drop target was registered without a status value.
    #[error("column drop target '{0}' has no status")]
    MissingColumnStatus(String),

    /// A column drop target carried an unknown status value.
    #[error(transparent)]
    InvalidColumnStatus(#[from] ParseTaskFieldError),
}
