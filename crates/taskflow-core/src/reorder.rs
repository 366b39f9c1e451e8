//! Maps a reordering of a filtered view back onto the canonical sequence.
//!
//! The canonical sequence may contain tasks invisible to the view that
//! was dragged. Those must not be redistributed: each hidden task keeps
//! its slot, so it stays next to the same visible neighbors it had
//! before the drag.

use crate::error::TaskError;
use crate::id::TaskId;
use crate::task::Task;
use std::collections::{HashMap, HashSet};

/// Rewrite the canonical sequence so the visible tasks follow `after`.
///
/// `before` is the filtered view as it existed when the drag started;
/// `after` is the same set of ids in the user's new order. Visible
/// positions in the canonical sequence are filled from `after` left to
/// right, while every task absent from the view stays at its index.
///
/// # Errors
/// Returns [`TaskError::Invariant`] when `before` contains ids missing
/// from the canonical sequence, or when `before` and `after` are not
/// permutations of each other.
pub fn apply_view_order(
    canonical: &[Task],
    before: &[TaskId],
    after: &[TaskId],
) -> Result<Vec<Task>, TaskError> {
    let visible: HashSet<TaskId> = before.iter().copied().collect();
    if visible.len() != before.len() {
        return Err(TaskError::Invariant(
            "view order contains a duplicate task id".to_owned(),
        ));
    }

    let mut sorted_before = before.to_vec();
    let mut sorted_after = after.to_vec();
    sorted_before.sort_unstable();
    sorted_after.sort_unstable();
    if sorted_before != sorted_after {
        return Err(TaskError::Invariant(
            "new view order is not a permutation of the old one".to_owned(),
        ));
    }

    let by_id: HashMap<TaskId, &Task> = canonical.iter().map(|task| (task.id, task)).collect();
    for id in before {
        if !by_id.contains_key(id) {
            return Err(TaskError::Invariant(format!(
                "view task {id} is not part of the canonical sequence"
            )));
        }
    }

    let mut replacements = after.iter();
    let mut next = Vec::with_capacity(canonical.len());
    for task in canonical {
        if visible.contains(&task.id) {
            let id = replacements.next().ok_or_else(|| {
                TaskError::Invariant("view order is shorter than its canonical footprint".to_owned())
            })?;
            let replacement = by_id.get(id).ok_or_else(|| {
                TaskError::Invariant(format!("view task {id} is not part of the canonical sequence"))
            })?;
            next.push((*replacement).clone());
        } else {
            next.push(task.clone());
        }
    }
    Ok(next)
}
