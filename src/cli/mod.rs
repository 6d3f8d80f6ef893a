//! Command-line interface for taskdeck
//!
//! This module defines the CLI structure using clap derive macros and the
//! dispatch from parsed arguments into the task store.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::{emit_success, OutputOptions};
use crate::store::{Outcome, TaskStore};
use crate::task::{Status, Task};

/// taskdeck - a task tracker backed by a local JSON file
///
/// Tasks live in `tasks.json` in the working directory unless `--file`,
/// `TASKDECK_FILE`, or `.taskdeck.toml` says otherwise.
#[derive(Parser, Debug)]
#[command(name = "taskdeck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Path to the task store file (defaults to ./tasks.json)
    #[arg(long, global = true, env = "TASKDECK_FILE")]
    pub file: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new task
    Add {
        /// Task description
        description: String,
    },

    /// List tasks, optionally filtered by status
    List {
        /// Status filter: todo, in-progress, or done
        status: Option<String>,
    },

    /// Replace a task's description
    Update {
        /// Task id
        id: String,

        /// New description
        description: String,
    },

    /// Delete a task
    Delete {
        /// Task id
        id: String,
    },

    /// Mark a task as in-progress
    MarkInProgress {
        /// Task id
        id: String,
    },

    /// Mark a task as done
    MarkDone {
        /// Task id
        id: String,
    },
}

#[derive(Serialize)]
struct AddOutput {
    id: u64,
}

#[derive(Serialize)]
struct ListOutput {
    tasks: Vec<Task>,
}

#[derive(Serialize)]
struct MutationOutput {
    id: u64,
    found: bool,
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let options = OutputOptions {
            json: self.json,
            quiet: self.quiet,
        };

        let store_path = match self.file {
            Some(path) => path,
            None => Config::load_cwd()?.file,
        };
        let mut store = TaskStore::load(store_path)?;

        match self.command {
            Commands::Add { description } => {
                let id = store.add(description)?;
                emit_success(
                    options,
                    "add",
                    &AddOutput { id },
                    &[format!("Task added (ID: {id})")],
                )
            }
            Commands::List { status } => {
                let filter = parse_filter(status.as_deref())?;
                let tasks: Vec<Task> = store.list(filter).cloned().collect();
                let lines: Vec<String> = tasks.iter().map(Task::render).collect();
                emit_success(options, "list", &ListOutput { tasks }, &lines)
            }
            Commands::Update { id, description } => {
                let id = parse_id(&id)?;
                let outcome = store.update(id, description)?;
                report_mutation(options, "update", id, outcome, || {
                    format!("Task updated (ID: {id})")
                })
            }
            Commands::Delete { id } => {
                let id = parse_id(&id)?;
                let outcome = store.delete(id)?;
                report_mutation(options, "delete", id, outcome, || {
                    format!("Task deleted (ID: {id})")
                })
            }
            Commands::MarkInProgress { id } => {
                let id = parse_id(&id)?;
                let outcome = store.mark(id, Status::InProgress)?;
                report_mutation(options, "mark-in-progress", id, outcome, || {
                    format!("Task marked as in-progress (ID: {id})")
                })
            }
            Commands::MarkDone { id } => {
                let id = parse_id(&id)?;
                let outcome = store.mark(id, Status::Done)?;
                report_mutation(options, "mark-done", id, outcome, || {
                    format!("Task marked as done (ID: {id})")
                })
            }
        }
    }
}

/// Parse a positional id argument. Not going through clap's value parser
/// keeps the message on our error surface ("invalid ID: abc").
fn parse_id(value: &str) -> Result<u64> {
    let trimmed = value.trim();
    match trimmed.parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(Error::InvalidArgument(value.to_string())),
    }
}

/// An absent or empty filter means "all"; anything else must be one of the
/// three canonical statuses.
fn parse_filter(value: Option<&str>) -> Result<Option<Status>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(status) => Ok(Some(status.parse()?)),
    }
}

/// Print the result of a by-id mutation. "Not found" is reported, not an
/// error: the invocation still exits 0, matching the store's non-fatal view
/// of a missing id.
fn report_mutation(
    options: OutputOptions,
    command: &str,
    id: u64,
    outcome: Outcome,
    success_line: impl FnOnce() -> String,
) -> Result<()> {
    let found = outcome.applied();
    let line = if found {
        success_line()
    } else {
        format!("Task not found: {id}")
    };
    emit_success(options, command, &MutationOutput { id, found }, &[line])
}
