//! Task operations for the TaskManager.

use jiff::Timestamp;
use log::{debug, warn};

use super::TaskManager;
use crate::{
    error::{Result, TaskError},
    models::{Task, TaskId},
    params::{AddTask, Id},
    storage::LoadOutcome,
};

impl TaskManager {
    /// Loads the current collection, logging a warning when a corrupted file
    /// had to be treated as empty.
    pub fn load_tasks(&self) -> Result<Vec<Task>> {
        let outcome = self.file.load()?;
        if let LoadOutcome::Recovered(err) = &outcome {
            warn!("{err}. Starting with an empty list.");
        }
        Ok(outcome.into_tasks())
    }

    /// Appends a new pending task and saves the collection.
    ///
    /// The stored description is trimmed. The id is the current time in
    /// milliseconds, moved past the largest existing id if the clock has not
    /// advanced beyond it.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::InvalidInput` if the description is blank; nothing
    /// is read or written in that case.
    pub fn add_task(&self, params: &AddTask) -> Result<Task> {
        let description = params.description.trim();
        if description.is_empty() {
            return Err(TaskError::invalid_input("description")
                .with_reason("Task description must be a non-empty string"));
        }

        let mut tasks = self.load_tasks()?;
        let task = Task::new(next_id(&tasks, Timestamp::now()), description);
        tasks.push(task.clone());
        self.file.save(&tasks)?;

        debug!("Added task {}", task.id);
        Ok(task)
    }

    /// Returns the first task whose id matches, if any.
    pub fn find_task(&self, params: &Id) -> Result<Option<Task>> {
        let tasks = self.load_tasks()?;
        Ok(tasks.into_iter().find(|task| task.id == params.id))
    }

    /// Removes the task with the given id.
    ///
    /// Returns the removed task, or `None` without touching the file when no
    /// task has that id.
    pub fn delete_task(&self, params: &Id) -> Result<Option<Task>> {
        let Some(found) = self.find_task(params)? else {
            debug!("Task {} not found, nothing deleted", params.id);
            return Ok(None);
        };

        let mut tasks = self.load_tasks()?;
        tasks.retain(|task| task.id != params.id);
        self.file.save(&tasks)?;

        debug!("Deleted task {}", found.id);
        Ok(Some(found))
    }
}

/// Picks the id for a task created at `now`.
pub(crate) fn next_id(tasks: &[Task], now: Timestamp) -> TaskId {
    let now = now.as_millisecond();
    match tasks.iter().map(|task| task.id).max() {
        Some(max) if max >= now => max.saturating_add(1),
        _ => now,
    }
}
