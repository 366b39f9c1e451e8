//! CLI entry point for taskflow.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

use taskflow_app::TaskService;
use taskflow_core::{BoardColumn, ListFilter, Priority, TaskId};
use taskflow_store_kv::{FileKv, KvTaskStore};

use config::AppConfig;
use sink::ConsoleSink;

mod commands;
mod config;
mod sink;
mod view;

/// Personal task tracker with a flat list and a three-column board.
#[derive(Parser, Debug)]
#[command(name = "taskflow", version, about = "taskflow: organize your day from the terminal")]
struct Cli {
    /// Directory holding the task store (defaults to the user data dir).
    #[arg(long)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a new task to the end of the list.
    Add {
        /// What needs to be done.
        text: String,
        /// Due date as YYYY-MM-DD.
        #[arg(long)]
        due: Option<String>,
        /// Priority: low, medium, or high.
        #[arg(long)]
        priority: Option<Priority>,
    },

    /// Show the flat list view.
    List {
        /// Which tasks to show: all, active, or completed.
        #[arg(long, default_value_t = ListFilter::All)]
        filter: ListFilter,
    },

    /// Show the three-column board view.
    Board,

    /// Edit an existing task's text, due date, or priority.
    Edit {
        /// Task id.
        id: TaskId,
        /// New task text.
        #[arg(long)]
        text: Option<String>,
        /// New due date as YYYY-MM-DD.
        #[arg(long, conflicts_with = "clear_due")]
        due: Option<String>,
        /// Remove the due date.
        #[arg(long)]
        clear_due: bool,
        /// New priority: low, medium, or high.
        #[arg(long, conflicts_with = "clear_priority")]
        priority: Option<Priority>,
        /// Remove the priority.
        #[arg(long)]
        clear_priority: bool,
    },

    /// Toggle a task between completed and active.
    Toggle {
        /// Task id.
        id: TaskId,
    },

    /// Delete a task permanently.
    Rm {
        /// Task id.
        id: TaskId,
    },

    /// Move a task to a board column.
    Move {
        /// Task id.
        id: TaskId,
        /// Target column: todo, inprogress, or done.
        column: BoardColumn,
    },

    /// Rearrange tasks; ids are the new order of the chosen view.
    Reorder {
        /// Task ids in their new order.
        #[arg(required = true)]
        ids: Vec<TaskId>,
        /// Treat the ids as the new order of this filtered list view.
        #[arg(long, conflicts_with = "column")]
        filter: Option<ListFilter>,
        /// Treat the ids as the new order within this board column.
        #[arg(long)]
        column: Option<BoardColumn>,
    },

    /// Show completion statistics.
    Stats,
}

fn main() -> ExitCode {
    install_tracing();
    let Cli { store, cmd } = Cli::parse();

    match run(store, cmd) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(store: Option<PathBuf>, cmd: Command) -> Result<ExitCode> {
    let config = AppConfig::load()?;
    let store_dir = config::resolve_store_dir(store, &config)?;
    let mut service = TaskService::load(KvTaskStore::new(FileKv::new(store_dir)))?;
    let sink = ConsoleSink;
    let status = commands::run(cmd, &mut service, &sink)?;
    Ok(status.exit_code())
}

fn install_tracing() {
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .compact()
        .try_init();
}
