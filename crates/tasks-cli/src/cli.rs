//! Command handlers and their clap argument wrappers.
//!
//! Each command has a clap `Args` struct that converts into the core
//! parameter type before the [`TaskManager`] is called:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → TaskManager
//! ```
//!
//! Positional arguments are optional at the clap level so that a missing or
//! malformed value produces a friendly warning and a zero exit code rather
//! than a usage error. Words after the first argument are accepted and
//! ignored.

use anyhow::Result;
use clap::Args;
use log::{debug, error};
use tasks_core::{
    display::{CreateResult, DeleteResult, OperationStatus},
    params::{AddTask, Id},
    TaskId, TaskManager,
};

use crate::renderer::TerminalRenderer;

/// One-line usage shown for unknown or missing commands.
pub const USAGE: &str = "Usage: tasks [add <task> | list | delete <id>]";

/// Why a positional argument could not be turned into core parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgProblem {
    /// The argument was not given, or was given as an empty string
    Missing,
    /// The argument was given but could not be parsed
    Invalid,
}

/// Add a new task
#[derive(Args)]
pub struct AddTaskArgs {
    /// Description of the task
    #[arg(allow_hyphen_values = true)]
    pub description: Option<String>,
    #[arg(hide = true, num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,
}

impl TryFrom<AddTaskArgs> for AddTask {
    type Error = ArgProblem;

    fn try_from(val: AddTaskArgs) -> Result<Self, Self::Error> {
        match val.description {
            Some(description) if !description.is_empty() => Ok(AddTask { description }),
            _ => Err(ArgProblem::Missing),
        }
    }
}

/// Delete a task by ID
#[derive(Args)]
pub struct DeleteTaskArgs {
    /// ID of the task to delete, as shown by `list`
    #[arg(allow_hyphen_values = true)]
    pub id: Option<String>,
    #[arg(hide = true, num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,
}

/// A whitespace-only id is `Invalid`, not id 0.
impl TryFrom<DeleteTaskArgs> for Id {
    type Error = ArgProblem;

    fn try_from(val: DeleteTaskArgs) -> Result<Self, Self::Error> {
        match val.id.as_deref() {
            None | Some("") => Err(ArgProblem::Missing),
            Some(raw) => raw
                .trim()
                .parse::<TaskId>()
                .map(|id| Id { id })
                .map_err(|_| ArgProblem::Invalid),
        }
    }
}

/// List all tasks
#[derive(Args)]
pub struct ListTasksArgs {
    #[arg(hide = true, num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,
}

/// Dispatcher tying parsed commands to the task manager and renderer.
pub struct Cli {
    manager: TaskManager,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(manager: TaskManager, renderer: TerminalRenderer) -> Self {
        Self { manager, renderer }
    }

    /// Handle `add <description>`.
    ///
    /// Failures from the core are reported, never propagated.
    pub fn add_task(&self, args: AddTaskArgs) -> Result<()> {
        if !args.ignored.is_empty() {
            debug!("add: ignoring extra arguments {:?}", args.ignored);
        }
        let params = match AddTask::try_from(args) {
            Ok(params) => params,
            Err(_) => {
                return self.renderer.render_display(&OperationStatus::warning(
                    "Please provide a task description.",
                ))
            }
        };
        debug!("add: {:?}", params);

        match self.manager.add_task(&params) {
            Ok(task) => self
                .renderer
                .render_display(&CreateResult::new(task).entered_as(params.description)),
            Err(e) => {
                error!("Failed to add task: {e}");
                self.renderer.render_display(&OperationStatus::failure(format!(
                    "An unexpected error occurred: {e}"
                )))
            }
        }
    }

    /// Handle `list`.
    pub fn list_tasks(&self, args: &ListTasksArgs) -> Result<()> {
        debug!("list, ignoring {:?}", args.ignored);
        let tasks = self.manager.list_tasks()?;
        self.renderer.render_display(&tasks)
    }

    /// Handle `delete <id>`.
    pub fn delete_task(&self, args: DeleteTaskArgs) -> Result<()> {
        if !args.ignored.is_empty() {
            debug!("delete: ignoring extra arguments {:?}", args.ignored);
        }
        let params = match Id::try_from(args) {
            Ok(params) => params,
            Err(ArgProblem::Missing) => {
                return self.renderer.render_display(&OperationStatus::warning(
                    "Please provide the ID of the task that should be deleted.",
                ))
            }
            Err(ArgProblem::Invalid) => {
                return self
                    .renderer
                    .render_display(&OperationStatus::warning("Please provide a valid task ID."))
            }
        };
        debug!("delete: {:?}", params);

        match self.manager.delete_task(&params)? {
            Some(task) => self.renderer.render_display(&DeleteResult::new(task)),
            None => self.renderer.render_display(&OperationStatus::warning(
                "No task found with the provided ID.",
            )),
        }
    }

    /// Print the one-line usage for an unknown or missing command.
    pub fn usage(&self, raw: &[String]) -> Result<()> {
        debug!("usage for {:?}", raw);
        self.renderer.render(&format!("{USAGE}\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_args_conversion() {
        let args = AddTaskArgs {
            description: Some("Buy milk".to_string()),
            ignored: vec!["extra".to_string()],
        };
        assert_eq!(AddTask::try_from(args).unwrap().description, "Buy milk");
    }

    #[test]
    fn test_add_args_missing_or_empty() {
        for description in [None, Some(String::new())] {
            let args = AddTaskArgs {
                description,
                ignored: vec![],
            };
            assert_eq!(AddTask::try_from(args).unwrap_err(), ArgProblem::Missing);
        }
    }

    #[test]
    fn test_add_args_whitespace_reaches_core() {
        let args = AddTaskArgs {
            description: Some("   ".to_string()),
            ignored: vec![],
        };
        assert!(AddTask::try_from(args).is_ok());
    }

    #[test]
    fn test_delete_args_conversion() {
        let args = DeleteTaskArgs {
            id: Some(" 1699999999999 ".to_string()),
            ignored: vec!["extra".to_string()],
        };
        assert_eq!(Id::try_from(args).unwrap(), Id { id: 1699999999999 });
    }

    #[test]
    fn test_delete_args_problems() {
        let cases = [
            (None, ArgProblem::Missing),
            (Some(""), ArgProblem::Missing),
            (Some("abc"), ArgProblem::Invalid),
            (Some("12abc"), ArgProblem::Invalid),
            (Some("   "), ArgProblem::Invalid),
        ];
        for (id, expected) in cases {
            let args = DeleteTaskArgs {
                id: id.map(str::to_string),
                ignored: vec![],
            };
            assert_eq!(Id::try_from(args).unwrap_err(), expected);
        }
    }

    #[test]
    fn test_args_ignore_trailing_words() {
        use clap::Parser;

        use crate::args::{Args, Commands};

        let args = Args::try_parse_from(["tasks", "add", "buy", "milk", "-x"])
            .expect("extra words should parse");
        match args.command {
            Some(Commands::Add(add)) => {
                assert_eq!(add.description.as_deref(), Some("buy"));
                assert_eq!(add.ignored, vec!["milk", "-x"]);
            }
            _ => panic!("expected add command"),
        }

        let args = Args::try_parse_from(["tasks", "delete", "12", "34"])
            .expect("extra words should parse");
        assert!(matches!(args.command, Some(Commands::Delete(ref d)) if d.id.as_deref() == Some("12")));

        let args = Args::try_parse_from(["tasks", "list", "extra"]).expect("extra words should parse");
        assert!(matches!(args.command, Some(Commands::List(_))));
    }
}
