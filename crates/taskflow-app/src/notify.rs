//! Semantic outcomes translated into user-facing feedback.
//!
//! The engine never talks to a feedback channel itself: mutations
//! return typed results, and the presentation layer turns those into
//! [`Notification`] values for whatever sink it has wired up.

use std::fmt;
use taskflow_core::{BoardColumn, TaskId};

/// Outcome of a mutation, phrased for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// A task was created.
    Created(TaskId),
    /// A task's fields were edited.
    Updated(TaskId),
    /// A task was removed.
    Deleted(TaskId),
    /// A task was moved to another board column.
    Moved(TaskId, BoardColumn),
    /// The canonical order changed.
    Reordered,
    /// A recoverable operation failure.
    Error(String),
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created(_) => f.write_str("Task added successfully"),
            Self::Updated(_) => f.write_str("Task updated"),
            Self::Deleted(_) => f.write_str("Task deleted"),
            Self::Moved(_, column) => write!(f, "Task moved to {}", column.title()),
            Self::Reordered => f.write_str("Task order updated"),
            Self::Error(message) => f.write_str(message),
        }
    }
}

/// Fire-and-forget feedback channel; the engine never reads back from it.
pub trait NotificationSink {
    /// Deliver one notification.
    fn notify(&self, notification: &Notification);
}

/// Sink that drops every notification; for headless use and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&self, _notification: &Notification) {}
}
