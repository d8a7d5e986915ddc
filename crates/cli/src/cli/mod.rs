//! Subcommands

use std::io;

use clap::Subcommand;
use thiserror::Error;
use vip_discount::{
    banner::BannerError,
    locale::{LocaleError, LocaleTable},
    rules::EvaluationError,
    schema::SchemaError,
};

mod banner;
mod check_tags;
mod run;

/// Errors surfaced by any subcommand.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// IO error reading input or writing output.
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// Output serialisation or settings parsing error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Locale table could not be loaded or lacks a key.
    #[error(transparent)]
    Locale(#[from] LocaleError),

    /// Function input failed to parse or validate.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// The rule rejected the input.
    #[error("evaluation failed: {0}")]
    Evaluation(#[from] EvaluationError),

    /// Banner copy could not be built.
    #[error(transparent)]
    Banner(#[from] BannerError),

    /// Currency code is not an ISO 4217 code.
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Evaluate a function input document (file or stdin) and print the operations
    Run(run::RunArgs),

    /// Print the savings banner copy for a discounted order total
    Banner(banner::BannerArgs),

    /// Print whether a customer with the given tags is a VIP
    CheckTags(check_tags::CheckTagsArgs),
}

impl Command {
    pub(crate) fn run(self, locale: &LocaleTable) -> Result<(), CliError> {
        let stdout = io::stdout();

        match self {
            Command::Run(args) => run::run(&args, locale, stdout.lock()),
            Command::Banner(args) => banner::run(&args, locale, stdout.lock()),
            Command::CheckTags(args) => check_tags::run(&args, stdout.lock()),
        }
    }
}
