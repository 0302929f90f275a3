//! changelog-notify CLI entry point.
//!
//! Parses arguments, sets up logging, dispatches to the command handler, and
//! maps errors to exit codes.

use changelog_notify::cli::{Cli, LogFormat};
use changelog_notify::{commands, exit_codes, telemetry};
use std::process::ExitCode;
use tracing::Level;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    telemetry::init_tracing(cli.log_format == LogFormat::Json, level);

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
