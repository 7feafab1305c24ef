//! Display implementations for domain models.

use std::fmt;

use crate::models::Task;

impl Task {
    /// Completion marker shown in front of the task.
    pub fn marker(&self) -> &'static str {
        if self.done {
            "✓"
        } else {
            "○"
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} [{}] {}", self.marker(), self.id, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_task_display() {
        let task = Task::new(7, "Water plants");
        assert_eq!(format!("{task}"), "○ [7] Water plants\n");
    }

    #[test]
    fn test_done_task_display() {
        let task = Task {
            id: 8,
            description: "Pay rent".to_string(),
            done: true,
        };
        assert_eq!(format!("{task}"), "✓ [8] Pay rent\n");
    }
}
