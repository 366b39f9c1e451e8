//! Command execution against the task engine.

use std::process::ExitCode;

use anyhow::{Context, Result};
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use taskflow_app::{
    DueDatePatch, Notification, NotificationSink, PriorityPatch, ServiceError, TaskDraft,
    TaskPatch, TaskRecordStore, TaskService,
};
use crate::Command;
use crate::view;

/// Outcome of a command run: either it succeeded, or a recoverable
/// failure was already reported through the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    /// The command completed.
    Success,
    /// A recoverable failure was surfaced to the user.
    Failed,
}

impl CommandStatus {
    /// Process exit code for this outcome.
    #[must_use]
    pub const fn exit_code(self) -> ExitCode {
        match self {
            Self::Success => ExitCode::SUCCESS,
            Self::Failed => ExitCode::FAILURE,
        }
    }
}

/// Execute one command, translating outcomes into notifications.
///
/// Recoverable engine errors are surfaced through the sink and turn
/// into a failure exit code; only setup problems (bad arguments, an
/// unreadable store) bubble up as hard errors.
///
/// # Errors
/// Returns an error for malformed arguments such as an unparsable date.
pub fn run<S: TaskRecordStore>(
    command: Command,
    service: &mut TaskService<S>,
    sink: &dyn NotificationSink,
) -> Result<CommandStatus> {
    match command {
        Command::Add { text, due, priority } => {
            let draft = TaskDraft {
                text,
                due_date: due.as_deref().map(parse_due).transpose()?,
                priority,
            };
            match service.create(draft) {
                Ok(task) => {
                    sink.notify(&Notification::Created(task.id));
                    println!("{}", view::task_line(&task));
                    Ok(CommandStatus::Success)
                }
                Err(err) => Ok(report(sink, &err)),
            }
        }

        Command::List { filter } => {
            let stats = service.stats();
            let footer = view::completion_line(stats.completed, stats.total);
            println!("{}", view::render_list(&service.list(filter), filter, &footer));
            Ok(CommandStatus::Success)
        }

        Command::Board => {
            print!("{}", view::render_board(&service.board()));
            Ok(CommandStatus::Success)
        }

        Command::Edit {
            id,
            text,
            due,
            clear_due,
            priority,
            clear_priority,
        } => {
            let due_date = if clear_due {
                Some(DueDatePatch::Clear)
            } else {
                due.as_deref().map(parse_due).transpose()?.map(DueDatePatch::Set)
            };
            let priority = if clear_priority {
                Some(PriorityPatch::Clear)
            } else {
                priority.map(PriorityPatch::Set)
            };
            let patch = TaskPatch { text, due_date, priority };
            match service.update(id, patch) {
                Ok(task) => {
                    sink.notify(&Notification::Updated(task.id));
                    println!("{}", view::task_line(&task));
                    Ok(CommandStatus::Success)
                }
                Err(err) => Ok(report(sink, &err)),
            }
        }

        // Toggling is frequent; it stays silent apart from the new line.
        Command::Toggle { id } => match service.toggle_complete(id) {
            Ok(task) => {
                println!("{}", view::task_line(&task));
                Ok(CommandStatus::Success)
            }
            Err(err) => Ok(report(sink, &err)),
        },

        Command::Rm { id } => match service.delete(id) {
            Ok(()) => {
                sink.notify(&Notification::Deleted(id));
                Ok(CommandStatus::Success)
            }
            Err(err) => Ok(report(sink, &err)),
        },

        Command::Move { id, column } => match service.set_status(id, column) {
            Ok(task) => {
                sink.notify(&Notification::Moved(task.id, column));
                Ok(CommandStatus::Success)
            }
            Err(err) => Ok(report(sink, &err)),
        },

        Command::Reorder { ids, filter, column } => {
            let outcome = match (filter, column) {
                (None, None) => service.reorder(&ids),
                (Some(filter), None) => service.reorder_view(filter, &ids),
                (None, Some(column)) => service.reorder_column(column, &ids),
                // clap rejects --filter together with --column.
                (Some(_), Some(column)) => service.reorder_column(column, &ids),
            };
            match outcome {
                Ok(()) => {
                    sink.notify(&Notification::Reordered);
                    Ok(CommandStatus::Success)
                }
                Err(err) => Ok(report(sink, &err)),
            }
        }

        Command::Stats => {
            let stats = service.stats();
            println!(
                "{} total, {} completed ({}%)",
                stats.total,
                stats.completed,
                stats.percent_complete()
            );
            Ok(CommandStatus::Success)
        }
    }
}

fn report(sink: &dyn NotificationSink, err: &ServiceError) -> CommandStatus {
    sink.notify(&Notification::Error(err.to_string()));
    CommandStatus::Failed
}

fn parse_due(raw: &str) -> Result<OffsetDateTime> {
    let date = Date::parse(raw, format_description!("[year]-[month]-[day]"))
        .with_context(|| format!("invalid due date (expected YYYY-MM-DD): {raw}"))?;
    Ok(date.midnight().assume_utc())
}
