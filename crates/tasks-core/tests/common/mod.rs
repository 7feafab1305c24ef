use tasks_core::TaskManagerBuilder;
use tempfile::TempDir;

/// Helper function to create a manager over a fresh temporary tasks file
pub fn create_test_manager() -> (TempDir, tasks_core::TaskManager) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let tasks_path = temp_dir.path().join("tasks.json");
    let manager = TaskManagerBuilder::new()
        .with_tasks_path(Some(&tasks_path))
        .build()
        .expect("Failed to create manager");
    (temp_dir, manager)
}
