//! Domain types and projection logic for the taskflow task collection.
//!
//! This crate is pure: it defines the task record, derives list and
//! board views from the canonical sequence, and resolves reorders
//! performed on filtered views. Ownership of the canonical sequence and
//! all side effects live in `taskflow-app`.

/// Error taxonomy.
pub mod error;
/// Identifier types.
pub mod id;
/// Filtered-view reorder resolution.
pub mod reorder;
/// The task record and its enums.
pub mod task;
/// List and board projections.
pub mod view;

pub use error::TaskError;
pub use id::{IdGenerator, TaskId};
pub use reorder::apply_view_order;
pub use task::{BoardColumn, Priority, Task};
pub use view::{BoardView, ListFilter, project_board, project_list};
