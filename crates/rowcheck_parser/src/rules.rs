//! Rule set types.
//!
//! A rule set is the declarative form of a checker: separator, header flag and
//! the validators bound to each column. Rule files deserialize into these
//! types, which then build a configured [`Checker`].

use rowcheck_core::{CheckerConfig, Column, Validator};
use rowcheck_validator::{
    AllowedValues, Checker, DateFormat, Email, Integer, Length, NotEmpty, Pattern, Range,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors raised while turning a rule set into a checker.
#[derive(Debug, Error)]
pub enum RuleError {
    /// Separator cannot be used to split fields
    #[error("Invalid separator {0:?}: must be a single ASCII character other than '\"'")]
    InvalidSeparator(char),

    /// Regex pattern does not compile
    #[error("Invalid regex pattern for column {column} ('{pattern}'): {error}")]
    InvalidPattern {
        column: usize,
        pattern: String,
        error: String,
    },

    /// Range bounds are inverted
    #[error("Invalid range for column {column}: min {min} is greater than max {max}")]
    InvalidRange { column: usize, min: f64, max: f64 },

    /// Length bounds are inverted
    #[error("Invalid length for column {column}: min {min} is greater than max {max}")]
    InvalidLength {
        column: usize,
        min: usize,
        max: usize,
    },
}

/// Declarative description of a checker.
///
/// # Example
///
/// ```rust
/// use rowcheck_parser::{ColumnRules, Rule, RuleSet};
///
/// let rules = RuleSet {
///     separator: ';',
///     header: true,
///     columns: vec![ColumnRules {
///         index: 0,
///         name: Some("id".to_string()),
///         rules: vec![Rule::Integer],
///     }],
/// };
///
/// let checker = rules.build_checker().unwrap();
/// assert_eq!(checker.columns().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Field separator
    #[serde(default = "default_separator")]
    pub separator: char,

    /// Whether the first row is a header
    #[serde(default = "default_header")]
    pub header: bool,

    /// Per-column rules
    #[serde(default)]
    pub columns: Vec<ColumnRules>,
}

fn default_separator() -> char {
    ','
}

fn default_header() -> bool {
    true
}

/// Rules bound to one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnRules {
    /// Zero-based field index
    pub index: usize,

    /// Optional human-readable column name
    #[serde(default)]
    pub name: Option<String>,

    /// Rules applied to the field, in order
    pub rules: Vec<Rule>,
}

/// A single content rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Rule {
    /// Field must not be empty or whitespace
    NotEmpty,

    /// Numeric field must be within the inclusive range
    Range { min: f64, max: f64 },

    /// Field must match the regex
    Pattern { regex: String },

    /// Field must be one of the listed values
    AllowedValues { values: Vec<String> },

    /// Field length in characters must be within bounds
    Length {
        #[serde(default)]
        min: Option<usize>,
        #[serde(default)]
        max: Option<usize>,
    },

    /// Field must be a signed integer
    Integer,

    /// Field must be an email address
    Email,

    /// Field must be a date in the given chrono format
    Date { format: String },
}

impl Rule {
    /// Rule identifier, as written in rule files.
    pub fn name(&self) -> &'static str {
        match self {
            Rule::NotEmpty => "not_empty",
            Rule::Range { .. } => "range",
            Rule::Pattern { .. } => "pattern",
            Rule::AllowedValues { .. } => "allowed_values",
            Rule::Length { .. } => "length",
            Rule::Integer => "integer",
            Rule::Email => "email",
            Rule::Date { .. } => "date",
        }
    }

    /// Builds the validator for this rule on the given column.
    pub fn to_validator(&self, column: usize) -> Result<Box<dyn Validator>, RuleError> {
        let validator: Box<dyn Validator> = match self {
            Rule::NotEmpty => Box::new(NotEmpty),
            Rule::Range { min, max } => {
                if min > max {
                    return Err(RuleError::InvalidRange {
                        column,
                        min: *min,
                        max: *max,
                    });
                }
                Box::new(Range::new(*min, *max))
            }
            Rule::Pattern { regex } => {
                let pattern = Pattern::new(regex).map_err(|e| RuleError::InvalidPattern {
                    column,
                    pattern: regex.clone(),
                    error: e.to_string(),
                })?;
                Box::new(pattern)
            }
            Rule::AllowedValues { values } => Box::new(AllowedValues::new(values.iter().cloned())),
            Rule::Length { min, max } => {
                if let (Some(min), Some(max)) = (min, max) {
                    if min > max {
                        return Err(RuleError::InvalidLength {
                            column,
                            min: *min,
                            max: *max,
                        });
                    }
                }
                Box::new(Length::new(*min, *max))
            }
            Rule::Integer => Box::new(Integer),
            Rule::Email => Box::new(Email),
            Rule::Date { format } => Box::new(DateFormat::new(format.clone())),
        };

        Ok(validator)
    }
}

impl RuleSet {
    /// Creates an empty rule set.
    pub fn new(separator: char, header: bool) -> Self {
        Self {
            separator,
            header,
            columns: Vec::new(),
        }
    }

    /// Overrides the separator.
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Overrides the header flag.
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// Total number of rules across all columns.
    pub fn rule_count(&self) -> usize {
        self.columns.iter().map(|c| c.rules.len()).sum()
    }

    /// Builds a checker with one binding per rule, in file order.
    ///
    /// # Errors
    ///
    /// Returns a `RuleError` for an unusable separator or a malformed rule.
    pub fn build_checker(&self) -> Result<Checker, RuleError> {
        let config = CheckerConfig::new(self.separator, self.header);
        config
            .delimiter()
            .map_err(|_| RuleError::InvalidSeparator(self.separator))?;

        let mut checker = Checker::with_config(config);
        for column in &self.columns {
            for rule in &column.rules {
                checker.add_column(Column::from_boxed(
                    column.index,
                    rule.to_validator(column.index)?,
                ));
            }
        }

        debug!(
            "Built checker with {} bindings over {} columns",
            checker.columns().len(),
            self.columns.len()
        );

        Ok(checker)
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new(default_separator(), default_header())
    }
}
