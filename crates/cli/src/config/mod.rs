//! Command line configuration

use std::path::PathBuf;

use clap::Parser;
use tracing::debug;
use vip_discount::locale::{LocaleError, LocaleTable};

use crate::{cli::Command, config::observability::LoggingConfig};

pub(crate) mod observability;

/// VIP discount function command line host
#[derive(Debug, Parser)]
#[command(name = "vip-discount", about = "VIP order discount function", long_about = None)]
pub(crate) struct Config {
    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Locale table (.json, .yml or .yaml); the bundled English table when omitted
    #[arg(long, env = "VIP_DISCOUNT_LOCALE", global = true)]
    pub locale: Option<PathBuf>,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

impl Config {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Load the configured locale table.
    pub fn locale_table(&self) -> Result<LocaleTable, LocaleError> {
        match &self.locale {
            Some(path) => {
                debug!(path = %path.display(), "loading locale table");

                LocaleTable::from_path(path)
            }
            None => LocaleTable::bundled(),
        }
    }
}
