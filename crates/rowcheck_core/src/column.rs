//! Column bindings.

use crate::Validator;
use std::fmt;

/// Binds a validator to a zero-based field index.
///
/// Several bindings may target the same index; each is applied on its own.
/// The index is not bounds-checked here since the row width is only known
/// once the engine reads the first row.
pub struct Column {
    index: usize,
    validator: Box<dyn Validator>,
}

impl Column {
    /// Creates a new binding for the field at `index`.
    pub fn new(index: usize, validator: impl Validator + 'static) -> Self {
        Self {
            index,
            validator: Box::new(validator),
        }
    }

    /// Creates a binding from an already boxed validator.
    pub fn from_boxed(index: usize, validator: Box<dyn Validator>) -> Self {
        Self { index, validator }
    }

    /// Zero-based field index this binding addresses.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The bound validator.
    pub fn validator(&self) -> &dyn Validator {
        self.validator.as_ref()
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("index", &self.index)
            .field("validator", &self.validator.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ValidationFailure, ValidationResult};

    #[test]
    fn test_column_keeps_index_and_validator() {
        let column = Column::new(3, |value: &str| -> ValidationResult {
            if value.is_empty() {
                Err(ValidationFailure::new("empty"))
            } else {
                Ok(())
            }
        });

        assert_eq!(column.index(), 3);
        assert!(column.validator().validate("x").is_ok());
        assert!(column.validator().validate("").is_err());
    }

    #[test]
    fn test_debug_shows_validator_name() {
        let column = Column::new(1, |_: &str| -> ValidationResult { Ok(()) });
        let debug = format!("{:?}", column);
        assert!(debug.contains("index: 1"));
        assert!(debug.contains("custom"));
    }
}
