//! High-level API for managing the task list.
//!
//! [`TaskManager`] sits between the front end and the [`TaskFile`] accessor.
//! Every operation loads the collection fresh, works on it in memory and, if
//! it mutates anything, writes the whole collection back.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    TaskFile     │
//! │ (task_handlers) │───▶│   (task_ops)    │───▶│  (storage.rs)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!   Display wrappers       Business logic         JSON on disk
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use tasks_core::{params::{AddTask, Id}, TaskManagerBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let manager = TaskManagerBuilder::new()
//!     .with_tasks_path(Some("/tmp/tasks.json"))
//!     .build()?;
//!
//! let task = manager.add_task(&AddTask::new("Buy milk"))?;
//! println!("{}", manager.list_tasks()?);
//!
//! manager.delete_task(&Id { id: task.id })?;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod task_handlers;
pub mod task_ops;


pub use builder::TaskManagerBuilder;

use crate::storage::TaskFile;

/// Main interface for managing tasks.
pub struct TaskManager {
    pub(crate) file: TaskFile,
}

impl TaskManager {
    /// Creates a manager over the given tasks file.
    pub(crate) fn new(file: TaskFile) -> Self {
        Self { file }
    }

    /// The tasks file this manager reads and writes.
    pub fn task_file(&self) -> &TaskFile {
        &self.file
    }
}
