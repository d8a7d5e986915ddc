use std::io::Write;

use clap::Args;
use vip_discount::tags::{CustomerTags, VipStatus};

use super::CliError;

#[derive(Debug, Args)]
pub(crate) struct CheckTagsArgs {
    /// Customer tags
    tags: Vec<String>,
}

pub(crate) fn run(args: &CheckTagsArgs, mut out: impl Write) -> Result<(), CliError> {
    let tags: CustomerTags = args.tags.iter().map(String::as_str).collect();

    serde_json::to_writer(&mut out, &VipStatus::from(&tags))?;
    writeln!(out)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn check(tags: &[&str]) -> Result<String, CliError> {
        let mut out = Vec::new();
        let args = CheckTagsArgs {
            tags: tags.iter().map(ToString::to_string).collect(),
        };

        run(&args, &mut out)?;

        Ok(String::from_utf8_lossy(&out).trim_end().to_string())
    }

    #[test]
    fn reports_vip_customers() -> TestResult {
        assert_eq!(check(&["newsletter", "VIP"])?, r#"{"isVIP":true}"#);
        assert_eq!(check(&["vip"])?, r#"{"isVIP":false}"#);
        assert_eq!(check(&[])?, r#"{"isVIP":false}"#);

        Ok(())
    }
}
