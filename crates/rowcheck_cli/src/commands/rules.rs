use anyhow::{Context, Result};
use rowcheck_parser::parse_file;
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(rules_path: &str) -> Result<()> {
    info!("Verifying rule file: {}", rules_path);

    let rules = parse_file(Path::new(rules_path))
        .with_context(|| format!("Failed to parse rule file: {}", rules_path))?;

    // Building the checker compiles patterns and checks bounds
    rules
        .build_checker()
        .with_context(|| format!("Invalid rule set in {}", rules_path))?;

    output::print_success("Rule file is valid");

    println!("\nRule Summary:");
    println!("  Separator:   {:?}", rules.separator);
    println!("  Header:      {}", rules.header);
    println!("  Columns:     {}", rules.columns.len());
    println!("  Rules:       {}", rules.rule_count());

    if !rules.columns.is_empty() {
        println!("\nColumns:");
        for column in &rules.columns {
            let names: Vec<&str> = column.rules.iter().map(|r| r.name()).collect();
            match &column.name {
                Some(name) => println!("  [{}] {}: {}", column.index, name, names.join(", ")),
                None => println!("  [{}]: {}", column.index, names.join(", ")),
            }
        }
    }

    Ok(())
}
