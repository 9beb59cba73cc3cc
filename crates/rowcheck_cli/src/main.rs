mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "rowcheck")]
#[command(version, about = "Delimited text validation CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a delimited data file for shape and content defects
    Check {
        /// Path to the data file
        data: String,

        /// Path to the rule file (YAML or TOML); without it only row shape is checked
        #[arg(short, long)]
        rules: Option<String>,

        /// Field separator, overrides the rule file (use "tab" or "\t" for tabs)
        #[arg(short, long, value_parser = parse_separator)]
        separator: Option<char>,

        /// Treat the first row as data instead of a header
        #[arg(long)]
        no_header: bool,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Verify a rule file without checking any data
    Rules {
        /// Path to the rule file (YAML or TOML)
        rules: String,
    },
}

fn parse_separator(value: &str) -> Result<char, String> {
    match value {
        "tab" | "\\t" => Ok('\t'),
        _ => {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(c),
                _ => Err(format!("separator must be a single character, got '{}'", value)),
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    // Execute command
    match cli.command {
        Commands::Check {
            data,
            rules,
            separator,
            no_header,
            format,
        } => commands::check::execute(&data, rules.as_deref(), separator, no_header, &format),

        Commands::Rules { rules } => commands::rules::execute(&rules),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_separator() {
        assert_eq!(parse_separator(";"), Ok(';'));
        assert_eq!(parse_separator("tab"), Ok('\t'));
        assert_eq!(parse_separator("\\t"), Ok('\t'));
        assert!(parse_separator(";;").is_err());
        assert!(parse_separator("").is_err());
    }
}
