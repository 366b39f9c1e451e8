//! Engine layer for taskflow.
//!
//! This crate owns the canonical task sequence: it validates and
//! applies mutations, mirrors the sequence to the persistence port
//! after every change, and hands typed outcomes back to whatever
//! presentation layer sits on top.

pub mod notify;
pub mod patch;
pub mod service;
pub mod store;

// Re-exports for convenience
pub use notify::{Notification, NotificationSink, NullSink};
pub use patch::{DueDatePatch, PriorityPatch, TaskPatch};
pub use service::{ServiceError, TaskDraft, TaskService, TaskStats};
pub use store::TaskRecordStore;
