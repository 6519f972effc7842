//! TODO task record as returned by the remote todos endpoint.

use serde::{Deserialize, Serialize};

/// One unit of work belonging to an employee.
///
/// Tasks arrive as an ordered collection; the order is significant and
/// duplicates are legal. Both `title` and `completed` are required;
/// either missing fails decoding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Human-readable task title.
    pub title: String,
    /// Whether the task has been completed.
    pub completed: bool,
}
