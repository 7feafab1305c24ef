//! Collection wrapper for displaying the task list.

use std::{fmt, ops::Index};

use crate::models::Task;

/// Newtype wrapper for displaying the task collection in stored order.
///
/// An empty collection renders a friendly notice instead of nothing.
///
/// # Examples
///
/// ```rust
/// use tasks_core::{display::Tasks, models::Task};
///
/// let tasks = Tasks(vec![Task::new(1, "Buy milk"), Task::new(2, "Call mum")]);
/// assert_eq!(format!("{tasks}"), "○ [1] Buy milk\n○ [2] Call mum\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tasks(pub Vec<Task>);

impl Tasks {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of tasks in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the tasks.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.0.iter()
    }
}

impl Index<usize> for Tasks {
    type Output = Task;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Tasks {
    type Item = Task;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Tasks {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Tasks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No tasks yet.");
        }

        for task in self {
            write!(f, "{task}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tasks_display() {
        assert_eq!(format!("{}", Tasks(vec![])), "No tasks yet.\n");
    }

    #[test]
    fn test_tasks_keep_stored_order() {
        let tasks = Tasks(vec![Task::new(20, "later id first"), Task::new(10, "earlier id")]);
        let output = format!("{tasks}");

        let first = output.find("later id first").expect("first task missing");
        let second = output.find("earlier id").expect("second task missing");
        assert!(first < second);
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].id, 10);
    }
}
