//! Operator action query error types.

use thiserror::Error;

use crate::pattern::FilterField;

/// Errors that can occur while querying outstanding operator actions.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("invalid {field} filter: \"{value}\"")]
    Validation { field: FilterField, value: String },

    #[error("non-zero return code {rc} received while querying the operator with '{command}'")]
    CommandFailed {
        command: String,
        rc: i32,
        stdout: String,
        stderr: String,
    },

    #[error("console command '{command}' timed out after {secs}s")]
    Timeout { command: String, secs: u64 },

    #[error("unexpected error: {0}")]
    Unexpected(String),
}

/// Convenience alias for operator action results.
pub type ActionResult<T> = Result<T, ActionError>;
