//! Display formatting for tasks and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collections and operation outcomes get newtype wrappers so each context
//! can format the same data differently. All output is markdown-friendly
//! text that the CLI renderer prints either styled or plain.
//!
//! ```rust
//! use tasks_core::{display::{CreateResult, OperationStatus, Tasks}, models::Task};
//!
//! let task = Task::new(1, "Buy milk");
//! assert_eq!(
//!     format!("{}", CreateResult::new(task)),
//!     "Task added: \"Buy milk\" (ID: 1)\n"
//! );
//!
//! assert_eq!(format!("{}", Tasks(vec![])), "No tasks yet.\n");
//!
//! let warning = OperationStatus::warning("No task found with the provided ID.");
//! assert_eq!(format!("{warning}"), "Warning: No task found with the provided ID.\n");
//! ```

pub mod collections;
pub mod models;
pub mod results;
pub mod status;

pub use collections::Tasks;
pub use results::{CreateResult, DeleteResult};
pub use status::OperationStatus;
