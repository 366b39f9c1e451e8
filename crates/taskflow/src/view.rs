//! Plain-text rendering of the list and board views.

use std::fmt::Write as _;

use taskflow_core::view::BoardView;
use taskflow_core::{ListFilter, Task};
use time::OffsetDateTime;
use time::macros::format_description;

/// One task as a list line: checkbox, id, text, then badges.
#[must_use]
pub fn task_line(task: &Task) -> String {
    let mut line = format!(
        "[{}] {}  {}",
        if task.completed { "x" } else { " " },
        task.id,
        task.text
    );
    if let Some(due) = task.due_date {
        let _ = write!(line, "  (due {})", format_date(due));
    }
    if let Some(priority) = task.priority {
        let _ = write!(line, "  [{}]", priority.label());
    }
    line
}

/// The flat list view with a completion footer, or the filter's empty
/// message when nothing is visible.
#[must_use]
pub fn render_list(tasks: &[Task], filter: ListFilter, stats_line: &str) -> String {
    if tasks.is_empty() {
        return match filter {
            ListFilter::All => "Add your first task to get started".to_owned(),
            ListFilter::Active => "No active tasks found".to_owned(),
            ListFilter::Completed => "No completed tasks yet".to_owned(),
        };
    }
    let mut out = String::new();
    for task in tasks {
        out.push_str(&task_line(task));
        out.push('\n');
    }
    out.push_str(stats_line);
    out
}

/// The board view: three columns with headings and counts.
#[must_use]
pub fn render_board(board: &BoardView) -> String {
    let mut out = String::new();
    for (column, tasks) in board.columns() {
        let _ = writeln!(out, "{} ({})", column.title(), tasks.len());
        if tasks.is_empty() {
            out.push_str("  No tasks\n");
        } else {
            for task in tasks {
                let _ = writeln!(out, "  {}", task_line(task));
            }
        }
    }
    out
}

/// The "N of M tasks completed" footer.
#[must_use]
pub fn completion_line(completed: usize, total: usize) -> String {
    format!("{completed} of {total} tasks completed")
}

fn format_date(ts: OffsetDateTime) -> String {
    ts.format(format_description!("[month repr:short] [day padding:none], [year]"))
        .unwrap_or_else(|_| ts.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskflow_core::{BoardColumn, Priority, TaskId, project_board};
    use time::macros::datetime;

    fn task(id: i64, text: &str, completed: bool) -> Task {
        Task {
            id: TaskId(id),
            text: text.into(),
            completed,
            created_at: datetime!(2024-04-25 16:00:00 UTC),
            due_date: None,
            priority: None,
            status: Some(if completed { BoardColumn::Done } else { BoardColumn::Todo }),
        }
    }

    #[test]
    fn task_line_shows_badges() {
        let mut t = task(42, "Water the plants", false);
        t.due_date = Some(datetime!(2026-09-01 00:00:00 UTC));
        t.priority = Some(Priority::High);
        assert_eq!(task_line(&t), "[ ] 42  Water the plants  (due Sep 1, 2026)  [High]");
    }

    #[test]
    fn completed_task_line_is_checked() {
        assert_eq!(task_line(&task(1, "done", true)), "[x] 1  done");
    }

    #[test]
    fn empty_list_message_depends_on_the_filter() {
        assert_eq!(
            render_list(&[], ListFilter::All, ""),
            "Add your first task to get started"
        );
        assert_eq!(render_list(&[], ListFilter::Active, ""), "No active tasks found");
        assert_eq!(render_list(&[], ListFilter::Completed, ""), "No completed tasks yet");
    }

    #[test]
    fn list_ends_with_the_completion_footer() {
        let tasks = vec![task(1, "a", true), task(2, "b", false)];
        let rendered = render_list(&tasks, ListFilter::All, &completion_line(1, 2));
        assert!(rendered.ends_with("1 of 2 tasks completed"));
        assert!(rendered.starts_with("[x] 1  a\n"));
    }

    #[test]
    fn board_shows_headings_with_counts_and_placeholders() {
        let tasks = vec![task(1, "open", false), task(2, "closed", true)];
        let rendered = render_board(&project_board(&tasks));
        assert!(rendered.contains("To Do (1)"));
        assert!(rendered.contains("In Progress (0)"));
        assert!(rendered.contains("  No tasks\n"));
        assert!(rendered.contains("Done (1)"));
    }
}
