//! Progress summarization and report emission.

pub mod reporter;
pub mod summary;

pub use reporter::{ProgressReporter, TODO_FETCH_FAILED, USER_FETCH_FAILED};
pub use summary::ProgressSummary;
