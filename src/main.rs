#![forbid(unsafe_code)]

//! `todo-progress` — employee TODO progress reporter binary.
//!
//! Parses the employee identifier, resolves the service base URL, and
//! prints the completed-task report to standard output.

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

use todo_progress::api::ApiClient;
use todo_progress::cli::{Cli, LogFormat};
use todo_progress::report::ProgressReporter;
use todo_progress::{AppError, ReporterConfig, Result};

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.log_format)?;

    // The two reads are strictly sequential, so a single-threaded
    // runtime is all the tool needs.
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| AppError::Config(format!("failed to build tokio runtime: {err}")))?
        .block_on(run(args))
}

async fn run(args: Cli) -> Result<()> {
    let config = ReporterConfig::resolve(args.base_url.as_deref())?;
    debug!(base_url = %config.base_url, employee_id = args.employee_id, "starting report");

    let reporter = ProgressReporter::new(ApiClient::new(config.base_url));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    // A failed fetch has already been reported on stdout by the time
    // this returns Ok, so the process exits 0 in that case. Decode and
    // write failures propagate and exit nonzero.
    reporter.report_progress(args.employee_id, &mut out).await
}

fn init_tracing(log_format: LogFormat) -> Result<()> {
    // Diagnostics go to stderr and default to `warn` so the report on
    // stdout stays exactly as rendered.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    match log_format {
        LogFormat::Text => subscriber
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
        LogFormat::Json => subscriber
            .json()
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
    }

    Ok(())
}
