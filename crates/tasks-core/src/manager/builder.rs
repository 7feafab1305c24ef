//! Builder for creating and configuring TaskManager instances.

use std::path::{Path, PathBuf};

use super::TaskManager;
use crate::{
    error::{FileSystemResultExt, Result, TaskError},
    storage::TaskFile,
};

/// Builder for creating and configuring TaskManager instances.
#[derive(Debug, Clone)]
pub struct TaskManagerBuilder {
    tasks_path: Option<PathBuf>,
}

impl TaskManagerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self { tasks_path: None }
    }

    /// Sets a custom tasks file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/tasks/tasks.json` or `~/.local/share/tasks/tasks.json`
    pub fn with_tasks_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.tasks_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured manager, creating the parent directory of the
    /// tasks file when it is missing. The file itself is only created by the
    /// first save.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::XdgDirectory` if the default path cannot be resolved
    /// Returns `TaskError::FileSystem` if the parent directory cannot be created
    pub fn build(self) -> Result<TaskManager> {
        let tasks_path = match self.tasks_path {
            Some(path) => path,
            None => Self::default_tasks_path()?,
        };

        if let Some(parent) = tasks_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).fs_context(parent)?;
        }

        Ok(TaskManager::new(TaskFile::new(tasks_path)))
    }

    /// Returns the default tasks file path following XDG Base Directory
    /// specification.
    fn default_tasks_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("tasks")
            .place_data_file("tasks.json")
            .map_err(|e| TaskError::XdgDirectory(e.to_string()))
    }
}

impl Default for TaskManagerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
