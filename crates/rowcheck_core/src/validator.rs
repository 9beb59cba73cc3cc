//! The validator capability.
//!
//! A validator is a content predicate over a single field value. The engine
//! never looks inside a validator; it only calls [`Validator::validate`] and
//! forwards the failure it gets back.

use serde::Serialize;
use thiserror::Error;

/// Why a validator rejected a value.
///
/// The message is opaque to the engine and passed through unchanged into the
/// content error that records the rejection.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message}")]
pub struct ValidationFailure {
    message: String,
}

impl ValidationFailure {
    /// Creates a new failure with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result type for a single validator invocation.
pub type ValidationResult = std::result::Result<(), ValidationFailure>;

/// Core trait for field validators.
///
/// Implementations decide whether a single field value is acceptable. They are
/// `Send + Sync` so that a fully configured checker can be shared by reference.
///
/// # Example
///
/// ```rust
/// use rowcheck_core::{ValidationFailure, ValidationResult, Validator};
///
/// struct NoSpaces;
///
/// impl Validator for NoSpaces {
///     fn validate(&self, value: &str) -> ValidationResult {
///         if value.contains(' ') {
///             return Err(ValidationFailure::new("value contains spaces"));
///         }
///         Ok(())
///     }
///
///     fn name(&self) -> &str {
///         "no_spaces"
///     }
/// }
///
/// assert!(NoSpaces.validate("abc").is_ok());
/// assert!(NoSpaces.validate("a b").is_err());
/// ```
pub trait Validator: Send + Sync {
    /// Validates one field value.
    ///
    /// Returns `Ok(())` when the value is accepted, or a `ValidationFailure`
    /// describing the rejection.
    fn validate(&self, value: &str) -> ValidationResult;

    /// Short identifier used in logs and rule summaries.
    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> Validator for F
where
    F: Fn(&str) -> ValidationResult + Send + Sync,
{
    fn validate(&self, value: &str) -> ValidationResult {
        self(value)
    }
}
