//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing or editing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,
    /// The task title is longer than the store can hold.
    #[error("task title is {actual} characters; at most {max} are allowed")]
    TitleTooLong {
        /// Longest accepted title, in characters.
        max: usize,
        /// Length of the rejected title after trimming.
        actual: usize,
    },
}

/// Error returned while parsing task enum fields from persistence or input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task {field}: {value}")]
pub struct ParseTaskFieldError {
    /// Name of the field being parsed.
    pub field: &'static str,
    /// The rejected input value.
    pub value: String,
}

impl ParseTaskFieldError {
    pub(crate) fn new(field: &'static str, value: &str) -> Self {
        Self {
            field,
            value: value.to_owned(),
        }
    }
}
