//! Derived progress summary for one employee.

use std::fmt::{Display, Formatter};

use crate::models::Task;

/// Completed-task summary for one employee.
///
/// Non-persisted: built from a fetched task collection, rendered once,
/// and discarded. The completed subset preserves source order, and a
/// task appearing twice in the source appears twice here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSummary {
    /// Display name of the employee the summary belongs to.
    pub employee_name: String,
    /// Size of the full task collection, completed or not.
    pub total_tasks: usize,
    /// Completed tasks in original relative order.
    pub completed: Vec<Task>,
}

impl ProgressSummary {
    /// Partition `tasks` into the summary for `employee_name`.
    #[must_use]
    pub fn from_tasks(employee_name: String, tasks: Vec<Task>) -> Self {
        let total_tasks = tasks.len();
        let completed = tasks.into_iter().filter(|task| task.completed).collect();
        Self {
            employee_name,
            total_tasks,
            completed,
        }
    }

    /// Number of completed tasks; always equals the number of indented
    /// lines in the rendered report.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }
}

impl Display for ProgressSummary {
    /// Render the report: one header line followed by one tab-indented
    /// title line per completed task. Deterministic for equal inputs.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Employee {} is done with tasks ({}/{}):",
            self.employee_name,
            self.completed.len(),
            self.total_tasks,
        )?;
        for task in &self.completed {
            writeln!(f, "\t{}", task.title)?;
        }
        Ok(())
    }
}
