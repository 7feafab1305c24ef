//! Status messages for operation feedback.

use std::fmt;

/// Severity of an [`OperationStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Warning,
    Failure,
}

/// Wrapper type for displaying one-line status messages.
pub struct OperationStatus {
    pub message: String,
    pub kind: StatusKind,
}

impl OperationStatus {
    /// Create a new warning status. Warnings never change the exit code.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Warning,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Failure,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.kind {
            StatusKind::Warning => "Warning:",
            StatusKind::Failure => "Error:",
        };
        writeln!(f, "{label} {}", self.message)
    }
}
