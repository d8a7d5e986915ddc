use std::{
    fs::File,
    io::{self, BufReader, Read, Write},
    path::PathBuf,
};

use clap::Args;
use tracing::{info, warn};
use vip_discount::{
    locale::LocaleTable,
    rules::vip::VipDiscountRule,
    schema::{FunctionInput, run as run_rule},
};

use super::CliError;

#[derive(Debug, Args)]
pub(crate) struct RunArgs {
    /// Function input JSON; read from stdin when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,
}

pub(crate) fn run(args: &RunArgs, locale: &LocaleTable, out: impl Write) -> Result<(), CliError> {
    let rule = VipDiscountRule::new(locale)?;

    match &args.input {
        Some(path) => evaluate(&rule, BufReader::new(File::open(path)?), out),
        None => evaluate(&rule, io::stdin().lock(), out),
    }
}

fn evaluate(rule: &VipDiscountRule, input: impl Read, mut out: impl Write) -> Result<(), CliError> {
    let input = FunctionInput::from_reader(input).inspect_err(|error| {
        warn!("rejected function input: {error}");
    })?;

    let result = run_rule(rule, &input)?;

    info!(
        lines = input.cart.len(),
        operations = result.operations.len(),
        "evaluated VIP discount"
    );

    result.to_writer(&mut out)?;
    writeln!(out)?;

    Ok(())
}
