//! JSON file storage for the task collection.
//!
//! The whole collection is read on every load and rewritten on every save.
//! There is no locking: two processes saving the same file concurrently will
//! race, and the last writer wins.

use std::{
    fs::{self, File},
    io::{BufWriter, ErrorKind, Write},
    path::{Path, PathBuf},
};

use log::debug;

use crate::{
    error::{FileSystemResultExt, Result, TaskError},
    models::Task,
};

/// Result of reading the tasks file.
#[derive(Debug)]
pub enum LoadOutcome {
    /// No file exists yet.
    Missing,
    /// The file parsed as a task list.
    Loaded(Vec<Task>),
    /// The file exists but could not be parsed; the collection is treated as
    /// empty. Holds a [`TaskError::CorruptStorage`].
    Recovered(TaskError),
}

impl LoadOutcome {
    /// Returns true when the file was unreadable as a task list.
    pub fn is_recovered(&self) -> bool {
        matches!(self, LoadOutcome::Recovered(_))
    }

    /// Consumes the outcome, yielding the loaded collection.
    pub fn into_tasks(self) -> Vec<Task> {
        match self {
            LoadOutcome::Loaded(tasks) => tasks,
            LoadOutcome::Missing | LoadOutcome::Recovered(_) => Vec::new(),
        }
    }
}

/// Accessor for the single JSON file backing the task list.
#[derive(Debug, Clone)]
pub struct TaskFile {
    path: PathBuf,
}

impl TaskFile {
    /// Creates an accessor for the file at `path`. Nothing is touched on disk.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the task collection.
    ///
    /// A missing file is not an error. A file that does not parse as a JSON
    /// array of tasks is reported as [`LoadOutcome::Recovered`] and left on
    /// disk as is.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::FileSystem` if the file exists but cannot be read.
    pub fn load(&self) -> Result<LoadOutcome> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No tasks file at {}", self.path.display());
                return Ok(LoadOutcome::Missing);
            }
            Err(e) => return Err(e).fs_context(&self.path),
        };

        match serde_json::from_str::<Vec<Task>>(&data) {
            Ok(tasks) => {
                debug!("Loaded {} tasks from {}", tasks.len(), self.path.display());
                Ok(LoadOutcome::Loaded(tasks))
            }
            Err(source) => Ok(LoadOutcome::Recovered(TaskError::CorruptStorage {
                path: self.path.clone(),
                source,
            })),
        }
    }

    /// Overwrites the file with the full collection as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::FileSystem` if the file cannot be created or
    /// written, `TaskError::Serialization` if encoding fails.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let file = File::create(&self.path).fs_context(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, tasks)?;
        writer.flush().fs_context(&self.path)?;
        debug!("Saved {} tasks to {}", tasks.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn create_test_file() -> (TempDir, TaskFile) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file = TaskFile::new(temp_dir.path().join("tasks.json"));
        (temp_dir, file)
    }

    #[test]
    fn test_load_missing_file() {
        let (_temp_dir, file) = create_test_file();

        let outcome = file.load().expect("Failed to load");
        assert!(matches!(outcome, LoadOutcome::Missing));
        assert!(outcome.into_tasks().is_empty());
    }

    #[test]
    fn test_load_corrupt_file_recovers_and_keeps_content() {
        let (_temp_dir, file) = create_test_file();
        fs::write(file.path(), "{ not json").expect("Failed to write");

        let outcome = file.load().expect("Failed to load");
        assert!(outcome.is_recovered());
        match &outcome {
            LoadOutcome::Recovered(TaskError::CorruptStorage { path, .. }) => {
                assert_eq!(path, file.path())
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(outcome.into_tasks().is_empty());

        let on_disk = fs::read_to_string(file.path()).expect("Failed to read");
        assert_eq!(on_disk, "{ not json");
    }

    #[test]
    fn test_load_wrong_shape_recovers() {
        let (_temp_dir, file) = create_test_file();
        fs::write(file.path(), r#"{"id": 1}"#).expect("Failed to write");

        assert!(file.load().expect("Failed to load").is_recovered());
    }

    #[test]
    fn test_load_empty_file_recovers() {
        let (_temp_dir, file) = create_test_file();
        fs::write(file.path(), "").expect("Failed to write");

        assert!(file.load().expect("Failed to load").is_recovered());
    }

    #[test]
    fn test_load_directory_is_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file = TaskFile::new(temp_dir.path());

        assert!(matches!(file.load(), Err(TaskError::FileSystem { .. })));
    }

    #[test]
    fn test_save_then_load_preserves_order() {
        let (_temp_dir, file) = create_test_file();
        let tasks = vec![
            Task::new(3, "third"),
            Task {
                id: 1,
                description: "first".to_string(),
                done: true,
            },
            Task::new(2, "second"),
        ];

        file.save(&tasks).expect("Failed to save");
        let loaded = file.load().expect("Failed to load").into_tasks();

        assert_eq!(loaded, tasks);
    }

    #[test]
    fn test_save_is_pretty_printed() {
        let (_temp_dir, file) = create_test_file();
        file.save(&[Task::new(1699999999999, "Buy milk")])
            .expect("Failed to save");

        let on_disk = fs::read_to_string(file.path()).expect("Failed to read");
        assert_eq!(
            on_disk,
            "[\n  {\n    \"id\": 1699999999999,\n    \"description\": \"Buy milk\",\n    \"done\": false\n  }\n]"
        );
    }

    #[test]
    fn test_load_accepts_compact_json() {
        let (_temp_dir, file) = create_test_file();
        fs::write(
            file.path(),
            r#"[{"id":5,"description":"a","done":false},{"id":6,"description":"b","done":true}]"#,
        )
        .expect("Failed to write");

        let tasks = file.load().expect("Failed to load").into_tasks();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].id, 6);
        assert!(tasks[1].done);
    }
}
