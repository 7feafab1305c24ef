//! Tasks CLI Application
//!
//! Command-line interface for the Tasks to-do list.

mod args;
mod cli;
mod renderer;

use std::io::{stdout, IsTerminal};

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::{error::ErrorKind, Parser};
use cli::{Cli, USAGE};
use env_logger::Env;
use log::{debug, info};
use renderer::TerminalRenderer;
use tasks_core::TaskManagerBuilder;
use Commands::*;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let Args {
        tasks_file,
        no_color,
        command,
    } = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            debug!("Unrecognized arguments: {e}");
            return TerminalRenderer::new(false).render(&format!("{USAGE}\n"));
        }
    };

    let manager = TaskManagerBuilder::new()
        .with_tasks_path(tasks_file)
        .build()
        .context("Failed to initialize task list")?;

    let renderer = TerminalRenderer::new(!no_color && stdout().is_terminal());

    info!("Tasks started with {}", manager.task_file().path().display());

    let cli = Cli::new(manager, renderer);
    match command {
        Some(Add(args)) => cli.add_task(args),
        Some(List(args)) => cli.list_tasks(&args).context("Failed to list tasks"),
        Some(Delete(args)) => cli.delete_task(args).context("Failed to delete task"),
        Some(Unknown(raw)) => cli.usage(&raw),
        None => cli.usage(&[]),
    }
}
