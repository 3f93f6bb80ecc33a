use repolink_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Log to the XDG state file; fall back to stderr when it can't be opened.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable: {:#}", err);
    }

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("repolink error: {:#}", err);
        std::process::exit(1);
    }
}
