//! Core library for the Tasks command-line task list.
//!
//! The task list is a single JSON file holding an ordered array of tasks.
//! This crate provides the data model, the file accessor, the add/list/
//! find/delete operations, and display wrappers for their results.
//!
//! # Quick Start
//!
//! ```rust
//! use tasks_core::{params::{AddTask, Id}, TaskManagerBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::tempdir()?;
//! let manager = TaskManagerBuilder::new()
//!     .with_tasks_path(Some(dir.path().join("tasks.json")))
//!     .build()?;
//!
//! let task = manager.add_task(&AddTask::new("Buy milk"))?;
//! assert_eq!(manager.list_tasks()?.len(), 1);
//!
//! let removed = manager.delete_task(&Id { id: task.id })?;
//! assert_eq!(removed, Some(task));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod display;
pub mod error;
pub mod manager;
pub mod models;
pub mod params;
pub mod storage;

// Re-export commonly used types
pub use display::{CreateResult, DeleteResult, OperationStatus, Tasks};
pub use error::{Result, TaskError};
pub use manager::{TaskManager, TaskManagerBuilder};
pub use models::{Task, TaskId};
pub use params::{AddTask, Id};
pub use storage::{LoadOutcome, TaskFile};
