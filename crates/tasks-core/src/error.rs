//! Error types for the task library.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error type for all task list operations.
#[derive(Error, Debug)]
pub enum TaskError {
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The tasks file exists but does not hold a task list
    #[error("Tasks file '{path}' is corrupted: {source}")]
    CorruptStorage {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TaskError {
        TaskError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TaskError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }
}

/// Extension trait attaching the offending path to I/O errors.
pub trait FileSystemResultExt<T> {
    /// Map an I/O error to [`TaskError::FileSystem`] for `path`.
    fn fs_context(self, path: &Path) -> Result<T>;
}

impl<T> FileSystemResultExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, path: &Path) -> Result<T> {
        self.map_err(|source| TaskError::FileSystem {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Result type alias for task operations
pub type Result<T> = std::result::Result<T, TaskError>;
