use crate::id::TaskId;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;
use time::OffsetDateTime;

/// Priority label attached to a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait.
    Low,
    /// Default urgency for new tasks.
    Medium,
    /// Needs attention first.
    High,
}

impl Priority {
    /// Lowercase form used in the persisted record.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Capitalized form shown on badges.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input was not one of `low`, `medium`, `high`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(String);

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(ParsePriorityError(other.to_owned())),
        }
    }
}

/// One of the three board columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardColumn {
    /// Not started; also where tasks without an explicit column land.
    Todo,
    /// Actively being worked on.
    InProgress,
    /// Finished work.
    Done,
}

impl BoardColumn {
    /// Columns in fixed display order.
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Done];

    /// Lowercase form used in the persisted record.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "inprogress",
            Self::Done => "done",
        }
    }

    /// Column heading shown on the board.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }
}

impl fmt::Display for BoardColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input was not one of `todo`, `inprogress`, `done`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown board column: {0}")]
pub struct ParseColumnError(String);

impl FromStr for BoardColumn {
    type Err = ParseColumnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(Self::Todo),
            "inprogress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            other => Err(ParseColumnError(other.to_owned())),
        }
    }
}

/// A single task record.
///
/// Field names and value shapes match the persisted JSON: camelCase
/// keys, numeric `id`, RFC 3339 timestamps, optional fields omitted
/// when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, immutable after creation.
    pub id: TaskId,
    /// What needs to be done. Never empty.
    pub text: String,
    /// Whether the task is checked off.
    #[serde(default)]
    pub completed: bool,
    /// Creation timestamp, set once.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Optional deadline.
    #[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<OffsetDateTime>,
    /// Optional priority label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    /// Board column; absent reads as [`BoardColumn::Todo`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<BoardColumn>,
}

impl Task {
    /// Board column this task belongs to.
    #[must_use]
    pub fn column(&self) -> BoardColumn {
        self.status.unwrap_or(BoardColumn::Todo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn sample() -> Task {
        Task {
            id: TaskId(1_714_060_800_000),
            text: "Water the plants".into(),
            completed: false,
            created_at: datetime!(2024-04-25 16:00:00 UTC),
            due_date: None,
            priority: Some(Priority::Medium),
            status: Some(BoardColumn::Todo),
        }
    }

    #[test]
    fn record_serializes_with_camel_case_keys_and_omitted_optionals() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["id"], 1_714_060_800_000_i64);
        assert_eq!(json["text"], "Water the plants");
        assert_eq!(json["completed"], false);
        assert_eq!(json["createdAt"], "2024-04-25T16:00:00Z");
        assert_eq!(json["priority"], "medium");
        assert_eq!(json["status"], "todo");
        assert!(json.get("dueDate").is_none());
    }

    #[test]
    fn record_deserializes_without_optional_fields() {
        let task: Task = serde_json::from_str(
            r#"{"id":42,"text":"Call the bank","createdAt":"2024-04-25T16:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(task.id, TaskId(42));
        assert!(!task.completed);
        assert_eq!(task.due_date, None);
        assert_eq!(task.priority, None);
        assert_eq!(task.status, None);
        assert_eq!(task.column(), BoardColumn::Todo);
    }

    #[test]
    fn record_deserializes_null_due_date() {
        let task: Task = serde_json::from_str(
            r#"{"id":1,"text":"x","createdAt":"2024-04-25T16:00:00Z","dueDate":null}"#,
        )
        .unwrap();
        assert_eq!(task.due_date, None);
    }

    #[test]
    fn in_progress_column_uses_single_word_form() {
        assert_eq!(
            serde_json::to_value(BoardColumn::InProgress).unwrap(),
            "inprogress"
        );
        assert_eq!("inprogress".parse::<BoardColumn>().unwrap(), BoardColumn::InProgress);
    }

    #[test]
    fn priority_round_trips_through_str() {
        for priority in [Priority::Low, Priority::Medium, Priority::High] {
            assert_eq!(priority.as_str().parse::<Priority>().unwrap(), priority);
        }
        assert!("urgent".parse::<Priority>().is_err());
    }
}
