#![forbid(unsafe_code)]

//! Library crate backing the `todo-progress` binary.
//!
//! Fetches an employee record and their TODO list from a REST service,
//! derives the completed-task summary, and renders it as text.

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod models;
pub mod report;

pub use config::ReporterConfig;
pub use errors::{AppError, Result};
