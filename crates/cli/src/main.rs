//! VIP Discount command line host
//!
//! Runs the VIP order discount function over JSON documents, the way a discounting host would.

use std::process::ExitCode;

use tracing::error;

use crate::config::Config;

mod cli;
mod config;
mod observability;

/// VIP discount CLI entry point
fn main() -> ExitCode {
    // Load configuration from .env and CLI arguments
    let config = Config::load().unwrap_or_else(|e| e.exit());

    if let Err(init_error) = observability::init(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized, must use eprintln for subscriber errors"
        )]
        {
            eprintln!("Logging error: {init_error}");
        }

        return ExitCode::FAILURE;
    }

    let locale = match config.locale_table() {
        Ok(locale) => locale,
        Err(locale_error) => {
            error!("failed to load locale table: {locale_error}");

            return ExitCode::FAILURE;
        }
    };

    match config.command.run(&locale) {
        Ok(()) => ExitCode::SUCCESS,
        Err(command_error) => {
            error!("{command_error}");

            ExitCode::FAILURE
        }
    }
}
