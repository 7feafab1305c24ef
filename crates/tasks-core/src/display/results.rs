//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::Task;

/// Wrapper type for displaying the result of an add.
///
/// By default the stored description is echoed back; [`Self::entered_as`]
/// echoes the text exactly as the user typed it instead.
pub struct CreateResult<T> {
    pub resource: T,
    pub entered: Option<String>,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            entered: None,
        }
    }

    /// Echo `text` instead of the stored description.
    pub fn entered_as(mut self, text: impl Into<String>) -> Self {
        self.entered = Some(text.into());
        self
    }
}

impl fmt::Display for CreateResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .entered
            .as_deref()
            .unwrap_or(&self.resource.description);
        writeln!(f, "Task added: \"{text}\" (ID: {})", self.resource.id)
    }
}

/// Wrapper type for displaying the result of a delete.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Task {} removed successfully.", self.resource.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_result_echoes_entered_text() {
        let task = Task::new(3, "Buy milk");
        let output = format!("{}", CreateResult::new(task).entered_as("  Buy milk "));
        assert_eq!(output, "Task added: \"  Buy milk \" (ID: 3)\n");
    }

    #[test]
    fn test_delete_result_display() {
        let output = format!("{}", DeleteResult::new(Task::new(42, "gone")));
        assert_eq!(output, "Task 42 removed successfully.\n");
    }
}
