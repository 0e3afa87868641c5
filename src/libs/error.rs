//! Error types for the task store.
//!
//! Errors fall into two groups:
//!
//! - **Recoverable**: [`TaskError::Validation`] and [`TaskError::IndexOutOfRange`].
//!   The operation is rejected before anything is mutated; the caller reports
//!   the problem and carries on.
//! - **Fatal**: key, decryption, I/O and serialization failures. These are
//!   propagated to `main` and end the process.

use thiserror::Error;

/// A field that failed validation.
///
/// Checks run in the order name, date, then the description/priority/status
/// group, and the first failure is reported.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid name! Only letters are allowed.")]
    Name,

    #[error("Invalid date! Please use YYYY-MM-DD format.")]
    Date,

    #[error("Invalid description, priority, or status! Only letters are allowed.")]
    Text,
}

#[derive(Error, Debug)]
pub enum TaskError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid task index! {index} is out of range for {len} task(s).")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("key file error: {0}")]
    Key(String),

    #[error("failed to decrypt task data: {0}")]
    Decrypt(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TaskError {
    /// Whether the error only rejects the current operation, leaving the
    /// collection and the data file untouched.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, TaskError::Validation(_) | TaskError::IndexOutOfRange { .. })
    }
}
