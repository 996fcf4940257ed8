//! Error types for the todo crate.

use thiserror::Error;

/// Errors raised by task construction, lookup and persistence
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    // Validation errors
    #[error("Invalid date '{input}': date must be in YYYY-MM-DD format")]
    InvalidDate { input: String },

    #[error("Invalid priority '{priority}': priority must be High, Medium, or Low")]
    InvalidPriority { priority: String },

    #[error("Task description cannot be empty")]
    EmptyDescription,

    #[error("Unknown filter '{kind}': expected priority, due_date, tag, or keyword")]
    UnknownFilter { kind: String },

    // Lookup errors
    #[error("Task '{description}' not found")]
    TaskNotFound { description: String },

    // Storage errors
    #[error("Storage error: {reason}")]
    StorageError { reason: String },

    #[error("Failed to read file '{path}': {reason}")]
    FileReadError { path: String, reason: String },

    #[error("Failed to write file '{path}': {reason}")]
    FileWriteError { path: String, reason: String },

    #[error("Failed to parse JSON: {reason}")]
    JsonParseError { reason: String },
}

impl TodoError {
    /// Whether an interactive session can report this error and keep going.
    ///
    /// Validation and lookup failures only abort the single operation that
    /// raised them. Storage failures leave the session in an unknown state.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidDate { .. }
                | Self::InvalidPriority { .. }
                | Self::EmptyDescription
                | Self::UnknownFilter { .. }
                | Self::TaskNotFound { .. }
        )
    }
}

impl From<std::io::Error> for TodoError {
    fn from(err: std::io::Error) -> Self {
        Self::StorageError {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for TodoError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonParseError {
            reason: err.to_string(),
        }
    }
}

/// Result type alias for todo operations
pub type TodoResult<T> = Result<T, TodoError>;
