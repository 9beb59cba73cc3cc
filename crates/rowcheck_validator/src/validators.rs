//! Built-in field validators.
//!
//! This module provides ready-made validators for common content rules:
//! - NotEmpty: field must contain something other than whitespace
//! - Range: numeric field must be within min/max bounds
//! - Pattern: field must match a regex pattern
//! - AllowedValues: field must be one of a predefined set
//! - Length: field length (in characters) must be within bounds
//! - Integer: field must parse as a signed integer
//! - Email: field must be an email address
//! - DateFormat: field must be a date in a given `chrono` format

use chrono::NaiveDate;
use regex::Regex;
use rowcheck_core::{ValidationFailure, ValidationResult, Validator};
use validator::ValidateEmail;

/// Rejects empty and whitespace-only values.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotEmpty;

impl Validator for NotEmpty {
    fn validate(&self, value: &str) -> ValidationResult {
        if value.trim().is_empty() {
            return Err(ValidationFailure::new("Value is empty"));
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "not_empty"
    }
}

/// Accepts numbers within an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    min: f64,
    max: f64,
}

impl Range {
    /// Creates a new range validator. Both bounds are inclusive.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl Validator for Range {
    fn validate(&self, value: &str) -> ValidationResult {
        let number: f64 = value.trim().parse().map_err(|_| {
            ValidationFailure::new(format!("Value '{}' is not a number", value))
        })?;

        if number.is_nan() || number < self.min || number > self.max {
            return Err(ValidationFailure::new(format!(
                "Value {} out of range [{}, {}]",
                number, self.min, self.max
            )));
        }

        Ok(())
    }

    fn name(&self) -> &str {
        "range"
    }
}

/// Accepts values matching a regular expression.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compiles a new pattern validator.
    ///
    /// # Errors
    ///
    /// Returns the regex compilation error for invalid patterns.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    /// The source pattern.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl Validator for Pattern {
    fn validate(&self, value: &str) -> ValidationResult {
        if !self.regex.is_match(value) {
            return Err(ValidationFailure::new(format!(
                "Value '{}' does not match pattern '{}'",
                value,
                self.regex.as_str()
            )));
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "pattern"
    }
}

/// Accepts only values from a fixed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedValues {
    values: Vec<String>,
}

impl AllowedValues {
    /// Creates a new allowed-values validator.
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

impl Validator for AllowedValues {
    fn validate(&self, value: &str) -> ValidationResult {
        if !self.values.iter().any(|v| v == value) {
            return Err(ValidationFailure::new(format!(
                "Value '{}' not in allowed values: [{}]",
                value,
                self.values.join(", ")
            )));
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "allowed_values"
    }
}

/// Bounds the number of characters in a value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Length {
    min: Option<usize>,
    max: Option<usize>,
}

impl Length {
    /// Creates a new length validator. `None` leaves that side unbounded.
    pub fn new(min: Option<usize>, max: Option<usize>) -> Self {
        Self { min, max }
    }
}

impl Validator for Length {
    fn validate(&self, value: &str) -> ValidationResult {
        let len = value.chars().count();

        if let Some(min) = self.min {
            if len < min {
                return Err(ValidationFailure::new(format!(
                    "Value '{}' is shorter than {} characters",
                    value, min
                )));
            }
        }

        if let Some(max) = self.max {
            if len > max {
                return Err(ValidationFailure::new(format!(
                    "Value '{}' is longer than {} characters",
                    value, max
                )));
            }
        }

        Ok(())
    }

    fn name(&self) -> &str {
        "length"
    }
}

/// Accepts signed 64-bit integers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Integer;

impl Validator for Integer {
    fn validate(&self, value: &str) -> ValidationResult {
        value
            .trim()
            .parse::<i64>()
            .map(|_| ())
            .map_err(|_| ValidationFailure::new(format!("Value '{}' is not an integer", value)))
    }

    fn name(&self) -> &str {
        "integer"
    }
}

/// Accepts email addresses.
#[derive(Debug, Clone, Copy, Default)]
pub struct Email;

impl Validator for Email {
    fn validate(&self, value: &str) -> ValidationResult {
        if !value.validate_email() {
            return Err(ValidationFailure::new(format!(
                "Value '{}' is not a valid email address",
                value
            )));
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "email"
    }
}

/// Accepts calendar dates in a `chrono` format such as `%Y-%m-%d`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    format: String,
}

impl DateFormat {
    /// Creates a new date validator for the given format string.
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }
}

impl Validator for DateFormat {
    fn validate(&self, value: &str) -> ValidationResult {
        NaiveDate::parse_from_str(value, &self.format)
            .map(|_| ())
            .map_err(|e| {
                ValidationFailure::new(format!(
                    "Value '{}' is not a date in format '{}': {}",
                    value, self.format, e
                ))
            })
    }

    fn name(&self) -> &str {
        "date"
    }
}
