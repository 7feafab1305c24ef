//! Parameter structures for task operations.
//!
//! These structures carry no interface-specific derives so the same core
//! types can be filled in from any front end. The CLI defines its own clap
//! argument structs and converts them into these:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → TaskManager
//! ```

use serde::{Deserialize, Serialize};

use crate::models::TaskId;

/// Parameters for operations requiring just an ID.
///
/// Used by find_task and delete_task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the task to operate on
    pub id: TaskId,
}

impl From<TaskId> for Id {
    fn from(id: TaskId) -> Self {
        Id { id }
    }
}

/// Parameters for adding a new task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddTask {
    /// Description as supplied by the user; trimmed before it is stored
    pub description: String,
}

impl AddTask {
    /// Creates add parameters for `description`.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}
