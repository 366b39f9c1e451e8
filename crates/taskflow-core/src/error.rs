//! Error taxonomy for task collection operations.

use crate::id::TaskId;
use thiserror::Error;

/// Errors surfaced by task collection operations.
///
/// Every variant is recoverable: the operation is rejected and the
/// collection is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    /// The submitted input was rejected before any mutation.
    #[error("{0}")]
    Validation(String),

    /// The operation targeted an id that is not in the collection.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// A reorder input did not line up with the canonical task set,
    /// which signals a bookkeeping bug in the calling view.
    #[error("{0}")]
    Invariant(String),
}

impl TaskError {
    /// Validation failure for empty task text.
    #[must_use]
    pub fn empty_text() -> Self {
        Self::Validation("Task cannot be empty".to_owned())
    }
}
