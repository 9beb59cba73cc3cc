use anyhow::{Context, Result};
use rowcheck_parser::{RuleSet, parse_file};
use std::fs::File;
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(
    data_path: &str,
    rules_path: Option<&str>,
    separator: Option<char>,
    no_header: bool,
    format: &str,
) -> Result<()> {
    info!("Checking data file: {}", data_path);

    let mut rules = match rules_path {
        Some(path) => {
            let rules = parse_file(Path::new(path))
                .with_context(|| format!("Failed to parse rule file: {}", path))?;
            output::print_info(&format!(
                "Rules loaded: {} rules over {} columns",
                rules.rule_count(),
                rules.columns.len()
            ));
            rules
        }
        None => {
            output::print_info("No rule file given, checking row shape only");
            RuleSet::default()
        }
    };

    // Command line flags win over the rule file
    if let Some(separator) = separator {
        rules = rules.with_separator(separator);
    }
    if no_header {
        rules = rules.with_header(false);
    }
    info!("Separator: {:?}", rules.separator);
    info!("Header row: {}", rules.header);

    let checker = rules.build_checker().context("Invalid rule set")?;

    let file =
        File::open(data_path).with_context(|| format!("Failed to open data file: {}", data_path))?;
    let report = checker
        .check_report(file)
        .with_context(|| format!("Failed to check data file: {}", data_path))?;

    output::print_check_report(&report, format)?;

    if !report.passed {
        std::process::exit(1);
    }

    Ok(())
}
