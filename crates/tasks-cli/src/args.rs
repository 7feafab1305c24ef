use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{AddTaskArgs, DeleteTaskArgs, ListTasksArgs};

/// Main command-line interface for the Tasks to-do list
///
/// Tasks keeps a single list of to-do items in a local JSON file. Items can be
/// added, listed and deleted; every command reads the file, applies the
/// change, and writes the whole list back.
#[derive(Parser)]
#[command(version, about, name = "tasks")]
pub struct Args {
    /// Path to the JSON tasks file. Defaults to
    /// $XDG_DATA_HOME/tasks/tasks.json
    #[arg(long, global = true)]
    pub tasks_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Tasks CLI
///
/// Anything that is not one of these commands falls through to
/// [`Commands::Unknown`] so the usage line can be printed instead of a clap
/// error.
#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    #[command(alias = "a")]
    Add(AddTaskArgs),
    /// List all tasks
    #[command(aliases = ["l", "ls"])]
    List(ListTasksArgs),
    /// Delete a task by ID
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteTaskArgs),
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}
