use std::process::ExitCode;

use clap::Parser;

use adobe_keys::cli::{self, Cli};
use adobe_keys::logging;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Keep the guard alive until main returns so the log file is flushed
    let _guard = logging::init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli::run(cli, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %format!("{:#}", e), "Command failed");
            eprintln!("{}", cli::error_message(&e));
            ExitCode::FAILURE
        }
    }
}
