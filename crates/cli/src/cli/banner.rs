use std::{fs, io::Write, path::PathBuf};

use clap::Args;
use rust_decimal::Decimal;
use rusty_money::iso;
use vip_discount::{
    banner::{BannerSettings, SavingsBanner},
    locale::LocaleTable,
};

use super::CliError;

#[derive(Debug, Args)]
pub(crate) struct BannerArgs {
    /// Order total after the discount was applied
    #[arg(short, long, allow_negative_numbers = true)]
    total: Option<Decimal>,

    /// ISO 4217 currency code of the total
    #[arg(short, long, default_value = "USD")]
    currency: String,

    /// Merchant banner settings JSON
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Print the banner as JSON instead of text
    #[arg(long)]
    json: bool,
}

pub(crate) fn run(args: &BannerArgs, locale: &LocaleTable, mut out: impl Write) -> Result<(), CliError> {
    let currency =
        iso::find(&args.currency).ok_or_else(|| CliError::UnknownCurrency(args.currency.clone()))?;

    let settings: BannerSettings = match &args.settings {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => BannerSettings::default(),
    };

    let banner = SavingsBanner::build(locale, args.total, currency, &settings)?;

    if args.json {
        serde_json::to_writer(&mut out, &banner)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", banner.heading)?;

        for line in &banner.lines {
            writeln!(out, "{line}")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;
    use vip_discount::banner::BannerError;

    use super::*;

    fn args(total: Option<Decimal>, currency: &str) -> BannerArgs {
        BannerArgs {
            total,
            currency: currency.to_string(),
            settings: None,
            json: false,
        }
    }

    #[test]
    fn prints_heading_then_description_lines() -> TestResult {
        let mut out = Vec::new();

        run(&args(Some(Decimal::new(85_00, 2)), "USD"), &LocaleTable::bundled()?, &mut out)?;

        let text = String::from_utf8(out)?;
        let mut lines = text.lines();

        assert_eq!(lines.next(), Some("VIP discount applied"));
        assert!(lines.next().is_some_and(|line| line.contains("15.00")));
        assert_eq!(lines.count(), 1);

        Ok(())
    }

    #[test]
    fn unknown_currency_is_rejected() -> TestResult {
        let result = run(&args(None, "XYZ"), &LocaleTable::bundled()?, Vec::new());

        assert!(matches!(result, Err(CliError::UnknownCurrency(code)) if code == "XYZ"));

        Ok(())
    }

    #[test]
    fn negative_total_is_rejected() -> TestResult {
        let mut out = Vec::new();

        let result = run(&args(Some(Decimal::new(-10, 0)), "USD"), &LocaleTable::bundled()?, &mut out);

        assert!(matches!(
            result,
            Err(CliError::Banner(BannerError::NegativeTotal(_)))
        ));
        assert!(out.is_empty());

        Ok(())
    }
}
