//! Defect and error types.
//!
//! A check produces two kinds of *defects*, both non-fatal: shape errors
//! ([`RowError`]) and content errors ([`ColumnError`]). Anything that stops a
//! check altogether is a [`CheckError`].

use crate::ValidationFailure;
use serde::Serialize;
use thiserror::Error;

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, CheckError>;

/// A row whose field count differs from the reference width.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("line {line}: expected {expected} fields, found {actual}")]
pub struct RowError {
    line: u64,
    expected: usize,
    actual: usize,
}

impl RowError {
    /// Creates a new shape error.
    pub fn new(line: u64, expected: usize, actual: usize) -> Self {
        Self {
            line,
            expected,
            actual,
        }
    }

    /// 1-based line the row starts on.
    pub fn line(&self) -> u64 {
        self.line
    }

    /// Reference width established by the first row.
    pub fn expected(&self) -> usize {
        self.expected
    }

    /// Field count found on this row.
    pub fn actual(&self) -> usize {
        self.actual
    }
}

/// A field rejected by the validator bound to its column.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("line {line}, column {column}: {failure}")]
pub struct ColumnError {
    line: u64,
    column: usize,
    #[source]
    failure: ValidationFailure,
}

impl ColumnError {
    /// Creates a new content error.
    pub fn new(line: u64, column: usize, failure: ValidationFailure) -> Self {
        Self {
            line,
            column,
            failure,
        }
    }

    /// 1-based line the row starts on.
    pub fn line(&self) -> u64 {
        self.line
    }

    /// Zero-based index of the rejected field.
    pub fn column(&self) -> usize {
        self.column
    }

    /// The failure returned by the validator, unchanged.
    pub fn failure(&self) -> &ValidationFailure {
        &self.failure
    }
}

/// A single defect found while checking a source.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Defect {
    /// Row field count differs from the reference width
    #[error(transparent)]
    Shape(#[from] RowError),

    /// A bound validator rejected a field value
    #[error(transparent)]
    Content(#[from] ColumnError),
}

impl Defect {
    /// 1-based line of the row the defect was found on.
    pub fn line(&self) -> u64 {
        match self {
            Defect::Shape(err) => err.line(),
            Defect::Content(err) => err.line(),
        }
    }

    /// Returns true for shape errors.
    pub fn is_shape(&self) -> bool {
        matches!(self, Defect::Shape(_))
    }

    /// Returns true for content errors.
    pub fn is_content(&self) -> bool {
        matches!(self, Defect::Content(_))
    }

    /// Returns the shape error, if this is one.
    pub fn as_shape(&self) -> Option<&RowError> {
        match self {
            Defect::Shape(err) => Some(err),
            Defect::Content(_) => None,
        }
    }

    /// Returns the content error, if this is one.
    pub fn as_content(&self) -> Option<&ColumnError> {
        match self {
            Defect::Content(err) => Some(err),
            Defect::Shape(_) => None,
        }
    }
}

/// Errors that abort a check.
///
/// None of these are data defects: they mean either the source could not be
/// read or the checker itself is misconfigured.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The source could not be read or decoded
    #[error("Failed to read input{}: {message}", .line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Parse {
        /// Line where reading failed, when known
        line: Option<u64>,
        /// Reader error details
        message: String,
    },

    /// Separator is not a single-byte ASCII character
    #[error("Invalid separator {0:?}: must be a single ASCII character")]
    InvalidSeparator(char),

    /// A binding addresses a field beyond the reference width
    #[error("Column {column} is out of range for rows of {width} fields")]
    ColumnOutOfRange {
        /// Zero-based index of the offending binding
        column: usize,
        /// Reference width of the source
        width: usize,
    },
}

impl CheckError {
    /// Creates a new parse error.
    pub fn parse(line: Option<u64>, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Creates a new out-of-range column error.
    pub fn column_out_of_range(column: usize, width: usize) -> Self {
        Self::ColumnOutOfRange { column, width }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_row_error_display() {
        let err = RowError::new(3, 3, 4);
        assert_eq!(err.to_string(), "line 3: expected 3 fields, found 4");
    }

    #[test]
    fn test_column_error_passes_failure_through() {
        let err = ColumnError::new(2, 1, ValidationFailure::new("Paco"));
        assert_eq!(err.failure().message(), "Paco");
        assert_eq!(err.to_string(), "line 2, column 1: Paco");
    }

    #[test]
    fn test_defect_accessors() {
        let shape: Defect = RowError::new(5, 2, 1).into();
        assert!(shape.is_shape());
        assert_eq!(shape.line(), 5);
        assert!(shape.as_content().is_none());

        let content: Defect = ColumnError::new(7, 0, ValidationFailure::new("bad")).into();
        assert!(content.is_content());
        assert_eq!(content.line(), 7);
        assert_eq!(content.as_content().map(|e| e.column()), Some(0));
    }

    #[test]
    fn test_defect_serializes_with_kind_tag() {
        let defect: Defect = RowError::new(3, 3, 4).into();
        let json = serde_json::to_value(&defect).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "shape", "line": 3, "expected": 3, "actual": 4})
        );

        let defect: Defect = ColumnError::new(2, 1, ValidationFailure::new("empty")).into();
        let json = serde_json::to_value(&defect).unwrap();
        assert_eq!(json["kind"], "content");
        assert_eq!(json["column"], 1);
        assert_eq!(json["failure"]["message"], "empty");
    }

    #[test]
    fn test_parse_error_display() {
        let err = CheckError::parse(Some(4), "invalid utf-8");
        assert_eq!(err.to_string(), "Failed to read input at line 4: invalid utf-8");

        let err = CheckError::parse(None, "broken pipe");
        assert_eq!(err.to_string(), "Failed to read input: broken pipe");
    }
}
