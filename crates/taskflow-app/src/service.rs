//! The canonical task collection engine.

use thiserror::Error;
use time::OffsetDateTime;
use tracing::debug;

use taskflow_core::reorder::apply_view_order;
use taskflow_core::view::{BoardView, ListFilter, project_board, project_list};
use taskflow_core::{BoardColumn, IdGenerator, Priority, Task, TaskError, TaskId};

use crate::patch::{DueDatePatch, PriorityPatch, TaskPatch};
use crate::store::TaskRecordStore;

/// Errors surfaced by [`TaskService`] operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A domain rule rejected the operation; state is unchanged.
    #[error(transparent)]
    Task(#[from] TaskError),

    /// The backing store could not be read or written; state is unchanged.
    #[error("failed to persist tasks: {0}")]
    Store(#[source] anyhow::Error),
}

impl ServiceError {
    fn store<E: Into<anyhow::Error>>(err: E) -> Self {
        Self::Store(err.into())
    }
}

/// Fields for a task to be created.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    /// What needs to be done.
    pub text: String,
    /// Optional deadline.
    pub due_date: Option<OffsetDateTime>,
    /// Optional priority label.
    pub priority: Option<Priority>,
}

/// Aggregate counts for the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    /// Number of tasks in the collection.
    pub total: usize,
    /// Number of completed tasks.
    pub completed: usize,
}

impl TaskStats {
    /// Completed share as a rounded integer percentage; zero when empty.
    #[must_use]
    pub const fn percent_complete(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            (self.completed * 100 + self.total / 2) / self.total
        }
    }
}

/// Owns the canonical ordered task sequence and is its single source of
/// truth.
///
/// Every mutation validates first, then persists the candidate sequence,
/// and only replaces the in-memory state once the write succeeded, so
/// neither memory nor the store ever holds a partial mutation.
pub struct TaskService<S> {
    store: S,
    tasks: Vec<Task>,
    ids: IdGenerator,
}

impl<S: TaskRecordStore> TaskService<S> {
    /// Load the persisted sequence and build the engine around it.
    ///
    /// Records written before board columns existed may be completed
    /// without carrying a column; those reconcile to `done` here so the
    /// board and the completed flag agree.
    ///
    /// # Errors
    /// Returns an error only when the backing store cannot be read.
    pub fn load(store: S) -> Result<Self, ServiceError> {
        let mut tasks = store.load().map_err(ServiceError::store)?;
        for task in &mut tasks {
            if task.completed && task.status.is_none() {
                task.status = Some(BoardColumn::Done);
            }
        }
        let ids = IdGenerator::seeded(tasks.iter().map(|task| task.id).max().unwrap_or_default());
        debug!(count = tasks.len(), "loaded task collection");
        Ok(Self { store, tasks, ids })
    }

    /// The canonical sequence, in order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Flat list view under `filter`, preserving canonical order.
    #[must_use]
    pub fn list(&self, filter: ListFilter) -> Vec<Task> {
        project_list(&self.tasks, filter)
    }

    /// Board view grouped into the three columns.
    #[must_use]
    pub fn board(&self) -> BoardView {
        project_board(&self.tasks)
    }

    /// Aggregate counts over the collection.
    #[must_use]
    pub fn stats(&self) -> TaskStats {
        TaskStats {
            total: self.tasks.len(),
            completed: self.tasks.iter().filter(|task| task.completed).count(),
        }
    }

    /// Create a task and append it to the end of the canonical sequence.
    ///
    /// # Errors
    /// Rejects text that trims to empty with [`TaskError::Validation`];
    /// propagates store failures.
    pub fn create(&mut self, draft: TaskDraft) -> Result<Task, ServiceError> {
        if draft.text.trim().is_empty() {
            return Err(TaskError::empty_text().into());
        }
        let now = OffsetDateTime::now_utc();
        let task = Task {
            id: self.ids.next(now),
            text: draft.text,
            completed: false,
            created_at: now,
            due_date: draft.due_date,
            priority: draft.priority,
            status: Some(BoardColumn::Todo),
        };

        let mut next = self.tasks.clone();
        next.push(task.clone());
        self.commit(next)?;
        Ok(task)
    }

    /// Apply field edits to an existing task. Identity, completion
    /// state, board column, and creation timestamp are untouched.
    ///
    /// # Errors
    /// Fails with [`TaskError::NotFound`] for an unknown id and
    /// [`TaskError::Validation`] when the new text trims to empty;
    /// propagates store failures.
    pub fn update(&mut self, id: TaskId, patch: TaskPatch) -> Result<Task, ServiceError> {
        let index = self.index_of(id)?;
        if let Some(text) = &patch.text
            && text.trim().is_empty()
        {
            return Err(TaskError::empty_text().into());
        }

        let mut next = self.tasks.clone();
        let task = &mut next[index];
        if let Some(text) = patch.text {
            task.text = text;
        }
        match patch.due_date {
            Some(DueDatePatch::Set(due)) => task.due_date = Some(due),
            Some(DueDatePatch::Clear) => task.due_date = None,
            None => {}
        }
        match patch.priority {
            Some(PriorityPatch::Set(priority)) => task.priority = Some(priority),
            Some(PriorityPatch::Clear) => task.priority = None,
            None => {}
        }

        let task = task.clone();
        self.commit(next)?;
        Ok(task)
    }

    /// Remove a task permanently; the remaining tasks keep their
    /// relative order.
    ///
    /// Deleting an id that is not in the collection fails with
    /// [`TaskError::NotFound`], the same policy as every other
    /// id-addressed operation here.
    ///
    /// # Errors
    /// See above; also propagates store failures.
    pub fn delete(&mut self, id: TaskId) -> Result<(), ServiceError> {
        let index = self.index_of(id)?;
        let mut next = self.tasks.clone();
        next.remove(index);
        self.commit(next)
    }

    /// Flip the completed flag.
    ///
    /// Completing a task forces its column to `done`. Reopening one
    /// moves it from `done` back to `todo`, but a task sitting in
    /// `inprogress` keeps its column.
    ///
    /// # Errors
    /// Fails with [`TaskError::NotFound`] for an unknown id; propagates
    /// store failures.
    pub fn toggle_complete(&mut self, id: TaskId) -> Result<Task, ServiceError> {
        let index = self.index_of(id)?;
        let mut next = self.tasks.clone();
        let task = &mut next[index];
        task.completed = !task.completed;
        if task.completed {
            task.status = Some(BoardColumn::Done);
        } else if task.column() == BoardColumn::Done {
            task.status = Some(BoardColumn::Todo);
        }

        let task = task.clone();
        self.commit(next)?;
        Ok(task)
    }

    /// Move a task to a board column directly (board drag-and-drop).
    ///
    /// Dropping into `done` marks the task completed; dropping into any
    /// other column marks it not completed.
    ///
    /// # Errors
    /// Fails with [`TaskError::NotFound`] for an unknown id; propagates
    /// store failures.
    pub fn set_status(&mut self, id: TaskId, column: BoardColumn) -> Result<Task, ServiceError> {
        let index = self.index_of(id)?;
        let mut next = self.tasks.clone();
        let task = &mut next[index];
        task.status = Some(column);
        task.completed = column == BoardColumn::Done;

        let task = task.clone();
        self.commit(next)?;
        Ok(task)
    }

    /// Replace the canonical order wholesale.
    ///
    /// # Errors
    /// Fails with [`TaskError::Invariant`] unless `order` is exactly a
    /// permutation of the current ids; propagates store failures.
    pub fn reorder(&mut self, order: &[TaskId]) -> Result<(), ServiceError> {
        let current: Vec<TaskId> = self.tasks.iter().map(|task| task.id).collect();
        let next = apply_view_order(&self.tasks, &current, order).map_err(|_| {
            TaskError::Invariant("new order is not a permutation of the current tasks".to_owned())
        })?;
        self.commit(next)
    }

    /// Apply a drag performed on the filtered list view.
    ///
    /// `new_view` is the visible sequence in its new order. Tasks
    /// hidden by `filter` keep their positions relative to their
    /// visible neighbors.
    ///
    /// # Errors
    /// Fails with [`TaskError::Invariant`] when `new_view` is not a
    /// permutation of what `filter` currently shows; propagates store
    /// failures.
    pub fn reorder_view(&mut self, filter: ListFilter, new_view: &[TaskId]) -> Result<(), ServiceError> {
        let before: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|task| filter.matches(task))
            .map(|task| task.id)
            .collect();
        let next = apply_view_order(&self.tasks, &before, new_view)?;
        self.commit(next)
    }

    /// Apply a drag performed inside one board column.
    ///
    /// # Errors
    /// Fails with [`TaskError::Invariant`] when `new_order` is not a
    /// permutation of the column's members; propagates store failures.
    pub fn reorder_column(
        &mut self,
        column: BoardColumn,
        new_order: &[TaskId],
    ) -> Result<(), ServiceError> {
        let before: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|task| task.column() == column)
            .map(|task| task.id)
            .collect();
        let next = apply_view_order(&self.tasks, &before, new_order)?;
        self.commit(next)
    }

    /// Write the current sequence out; used as a final flush on shutdown.
    ///
    /// # Errors
    /// Propagates store failures.
    pub fn flush(&self) -> Result<(), ServiceError> {
        self.store.save(&self.tasks).map_err(ServiceError::store)
    }

    fn index_of(&self, id: TaskId) -> Result<usize, TaskError> {
        self.tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(TaskError::NotFound(id))
    }

    fn commit(&mut self, next: Vec<Task>) -> Result<(), ServiceError> {
        self.store.save(&next).map_err(ServiceError::store)?;
        self.tasks = next;
        Ok(())
    }
}
