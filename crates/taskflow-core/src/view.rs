//! Read-only projections of the canonical task sequence.
//!
//! Projections never mutate their input: they return new owned
//! sequences whose relative order is the canonical order restricted to
//! the members of the view.

use crate::task::{BoardColumn, Task};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Filter applied to the flat list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListFilter {
    /// Every task, in canonical order.
    #[default]
    All,
    /// Tasks that are not completed.
    Active,
    /// Tasks that are completed.
    Completed,
}

impl ListFilter {
    /// Lowercase form used on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Whether `task` is visible under this filter.
    #[must_use]
    pub const fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }
}

impl fmt::Display for ListFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input was not one of `all`, `active`, `completed`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown filter: {0}")]
pub struct ParseFilterError(String);

impl FromStr for ListFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            other => Err(ParseFilterError(other.to_owned())),
        }
    }
}

/// Filter the canonical sequence for the flat list view.
///
/// This is a stable filter: visible tasks keep their canonical relative
/// order and nothing is reordered.
#[must_use]
pub fn project_list(tasks: &[Task], filter: ListFilter) -> Vec<Task> {
    tasks.iter().filter(|task| filter.matches(task)).cloned().collect()
}

/// Tasks grouped into the three board columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardView {
    /// Tasks in the `todo` column, including tasks with no explicit column.
    pub todo: Vec<Task>,
    /// Tasks in the `inprogress` column.
    pub in_progress: Vec<Task>,
    /// Tasks in the `done` column.
    pub done: Vec<Task>,
}

impl BoardView {
    /// Tasks in one column.
    #[must_use]
    pub fn column(&self, column: BoardColumn) -> &[Task] {
        match column {
            BoardColumn::Todo => &self.todo,
            BoardColumn::InProgress => &self.in_progress,
            BoardColumn::Done => &self.done,
        }
    }

    /// Columns with their tasks, in fixed display order.
    pub fn columns(&self) -> impl Iterator<Item = (BoardColumn, &[Task])> {
        BoardColumn::ALL.into_iter().map(|column| (column, self.column(column)))
    }

    /// Total number of tasks across all columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.todo.len() + self.in_progress.len() + self.done.len()
    }

    /// Whether the board holds no tasks at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Group the canonical sequence into board columns.
///
/// Placement is determined solely by each task's `status` field; a task
/// without one lands in `todo`. Within a column, tasks keep their
/// canonical relative order.
#[must_use]
pub fn project_board(tasks: &[Task]) -> BoardView {
    let mut board = BoardView::default();
    for task in tasks {
        match task.column() {
            BoardColumn::Todo => board.todo.push(task.clone()),
            BoardColumn::InProgress => board.in_progress.push(task.clone()),
            BoardColumn::Done => board.done.push(task.clone()),
        }
    }
    board
}
