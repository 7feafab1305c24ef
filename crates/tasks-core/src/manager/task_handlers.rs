//! Task handler operations that return formatted wrapper types.

use super::TaskManager;
use crate::{display::Tasks, error::Result};

impl TaskManager {
    /// Lists every task in stored order.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use tasks_core::TaskManagerBuilder;
    /// # fn example() -> tasks_core::Result<()> {
    /// let manager = TaskManagerBuilder::new().build()?;
    /// let tasks = manager.list_tasks()?;
    /// print!("{tasks}");
    /// # Ok(())
    /// # }
    /// ```
    pub fn list_tasks(&self) -> Result<Tasks> {
        Ok(Tasks(self.load_tasks()?))
    }
}
