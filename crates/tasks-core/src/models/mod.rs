//! Data models for the task list.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping presentation apart from the data
//! structures that are persisted to disk.
//!
//! # Examples
//!
//! ```rust
//! use tasks_core::models::Task;
//!
//! let task = Task {
//!     id: 1699999999999,
//!     description: "Buy milk".to_string(),
//!     done: false,
//! };
//! assert_eq!(format!("{task}"), "○ [1699999999999] Buy milk\n");
//! ```

pub mod task;

pub use task::{Task, TaskId};
