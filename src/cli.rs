//! Command-line argument surface.
//!
//! Defined in the library crate so parse behaviour is testable without
//! spawning the binary.

use clap::{Parser, ValueEnum};

/// Log output format selector.
#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable line format.
    Text,
    /// Structured JSON lines.
    Json,
}

/// Command-line arguments for `todo-progress`.
///
/// Exactly one positional argument is accepted; any other invocation
/// fails parsing, prints usage, and performs no network activity.
#[derive(Debug, Parser)]
#[command(
    name = "todo-progress",
    about = "Report an employee's TODO completion progress",
    version,
    long_about = None
)]
pub struct Cli {
    /// Identifier of the employee to report on.
    pub employee_id: u64,

    /// Override the remote service base URL.
    ///
    /// Falls back to the `TODO_PROGRESS_BASE_URL` environment variable,
    /// then to the public jsonplaceholder endpoint.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Log output format (text or json).
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}
