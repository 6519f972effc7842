//! The two-call fetch-and-join sequence behind `report_progress`.

use std::io::Write;

use tracing::warn;

use crate::api::ApiClient;
use crate::report::ProgressSummary;
use crate::{AppError, Result};

/// Fixed message emitted when the employee lookup fails.
pub const USER_FETCH_FAILED: &str = "Failed to fetch user information.";

/// Fixed message emitted when the task fetch fails.
pub const TODO_FETCH_FAILED: &str = "Failed to fetch todo list.";

/// Orchestrates the employee lookup, the task fetch, and report emission.
#[derive(Debug, Clone)]
pub struct ProgressReporter {
    client: ApiClient,
}

impl ProgressReporter {
    /// Build a reporter over the given service client.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch the employee and their task list, then write the progress
    /// report to `out`.
    ///
    /// A failed fetch is terminal but not an error from the caller's
    /// perspective: the fixed failure line is written and `Ok(())` is
    /// returned, with no retry and no task output after a failed
    /// employee lookup. The two reads are strictly sequential; the
    /// second is never issued when the first fails.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Decode`] when a payload does not match the
    /// expected shape, [`AppError::Io`] when writing to `out` fails.
    pub async fn report_progress<W: Write>(&self, employee_id: u64, out: &mut W) -> Result<()> {
        let employee = match self.client.fetch_employee(employee_id).await {
            Ok(employee) => employee,
            Err(AppError::Http(reason)) => {
                warn!(employee_id, %reason, "employee lookup failed");
                return write_line(out, USER_FETCH_FAILED);
            }
            Err(err) => return Err(err),
        };

        let tasks = match self.client.fetch_tasks(employee_id).await {
            Ok(tasks) => tasks,
            Err(AppError::Http(reason)) => {
                warn!(employee_id, %reason, "todo fetch failed");
                return write_line(out, TODO_FETCH_FAILED);
            }
            Err(err) => return Err(err),
        };

        let summary = ProgressSummary::from_tasks(employee.name, tasks);
        write!(out, "{summary}").map_err(AppError::from)
    }
}

fn write_line<W: Write>(out: &mut W, line: &str) -> Result<()> {
    writeln!(out, "{line}").map_err(AppError::from)
}
