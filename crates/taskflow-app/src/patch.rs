//! Edit payloads applied to existing tasks.

use taskflow_core::Priority;
use time::OffsetDateTime;

/// Patch for the optional due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueDatePatch {
    /// Set the due date to the provided timestamp.
    Set(OffsetDateTime),
    /// Remove the due date entirely.
    Clear,
}

/// Patch for the optional priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityPatch {
    /// Set the priority to the provided label.
    Set(Priority),
    /// Remove the priority entirely.
    Clear,
}

/// Field edits applied by [`TaskService::update`](crate::service::TaskService::update).
///
/// `None` leaves a field unchanged. Identity, completion state, board
/// column, and creation timestamp are never touched by an update.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    /// Replace the task text.
    pub text: Option<String>,
    /// Set or clear the due date.
    pub due_date: Option<DueDatePatch>,
    /// Set or clear the priority.
    pub priority: Option<PriorityPatch>,
}

impl TaskPatch {
    /// Returns true when the patch would change nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.text.is_none() && self.due_date.is_none() && self.priority.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_patch_is_empty() {
        assert!(TaskPatch::default().is_empty());
    }

    #[test]
    fn patch_with_any_field_is_not_empty() {
        let patch = TaskPatch {
            due_date: Some(DueDatePatch::Clear),
            ..TaskPatch::default()
        };
        assert!(!patch.is_empty());
    }
}
