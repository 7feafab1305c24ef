//! Task model definition.

use serde::{Deserialize, Serialize};

/// Identifier of a task: its creation time in milliseconds since the Unix
/// epoch.
pub type TaskId = i64;

/// A single to-do item as stored in the tasks file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Unique identifier for the task
    pub id: TaskId,

    /// Trimmed, non-empty description
    pub description: String,

    /// Completion flag, `false` for every newly created task
    pub done: bool,
}

impl Task {
    /// Creates a pending task.
    pub fn new(id: TaskId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            done: false,
        }
    }
}
