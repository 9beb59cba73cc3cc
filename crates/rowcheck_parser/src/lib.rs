//! Parser for rowcheck rule files (YAML/TOML formats).
//!
//! This module parses rule files into the strongly-typed [`RuleSet`], which in
//! turn builds a configured checker.
//!
//! # Example
//!
//! ```rust
//! use rowcheck_parser::parse_yaml;
//!
//! let yaml = r#"
//! separator: ";"
//! header: true
//! columns:
//!   - index: 0
//!     name: id
//!     rules:
//!       - type: integer
//!   - index: 1
//!     rules:
//!       - type: not_empty
//! "#;
//!
//! let rules = parse_yaml(yaml).expect("Failed to parse rules");
//! assert_eq!(rules.separator, ';');
//! assert_eq!(rules.rule_count(), 2);
//! ```

mod rules;

pub use rules::*;

use std::path::Path;
use thiserror::Error;

/// Errors that can occur during rule file parsing.
#[derive(Debug, Error)]
pub enum ParserError {
    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    TomlError(String),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported rule file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
}

/// Parse a rule set from a YAML string.
pub fn parse_yaml(content: &str) -> Result<RuleSet> {
    let rules: RuleSet = serde_yaml_ng::from_str(content)?;
    Ok(rules)
}

/// Parse a rule set from a TOML string.
///
/// # Example
///
/// ```rust
/// use rowcheck_parser::parse_toml;
///
/// let toml = r#"
/// separator = "|"
///
/// [[columns]]
/// index = 2
/// rules = [{ type = "range", min = 0.0, max = 10.0 }]
/// "#;
///
/// let rules = parse_toml(toml).unwrap();
/// assert_eq!(rules.separator, '|');
/// assert!(rules.header);
/// ```
pub fn parse_toml(content: &str) -> Result<RuleSet> {
    let rules: RuleSet =
        toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))?;
    Ok(rules)
}

/// Detect the rule file format from a path based on its extension.
///
/// # Supported Extensions
///
/// * `.yaml`, `.yml` → `RuleFormat::Yaml`
/// * `.toml` → `RuleFormat::Toml`
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension.
/// Returns `ParserError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<RuleFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(RuleFormat::Yaml),
        "toml" => Ok(RuleFormat::Toml),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a rule set from a file with automatic format detection.
///
/// ```no_run
/// use rowcheck_parser::parse_file;
/// use std::path::Path;
///
/// let rules = parse_file(Path::new("rules/people.yml")).unwrap();
/// println!("Loaded {} rules", rules.rule_count());
/// ```
pub fn parse_file(path: &Path) -> Result<RuleSet> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;

    match format {
        RuleFormat::Yaml => parse_yaml(&content),
        RuleFormat::Toml => parse_toml(&content),
    }
}
