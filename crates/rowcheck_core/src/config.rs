//! Engine configuration.

use crate::{CheckError, Result};

/// Settings a checker runs with.
///
/// Immutable once the checker is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckerConfig {
    separator: char,
    with_header: bool,
}

impl CheckerConfig {
    /// Creates a new configuration.
    ///
    /// # Arguments
    ///
    /// * `separator` - Field separator, a single ASCII character
    /// * `with_header` - Whether the first row is a header excluded from
    ///   content checks
    pub fn new(separator: char, with_header: bool) -> Self {
        Self {
            separator,
            with_header,
        }
    }

    /// Field separator.
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Whether the first row is a header.
    pub fn with_header(&self) -> bool {
        self.with_header
    }

    /// Returns the separator as the single byte the reader splits on.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::InvalidSeparator` for non-ASCII separators and for
    /// the double quote, which is reserved for field quoting.
    pub fn delimiter(&self) -> Result<u8> {
        if !self.separator.is_ascii() || self.separator == '"' {
            return Err(CheckError::InvalidSeparator(self.separator));
        }
        Ok(self.separator as u8)
    }
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self::new(',', true)
    }
}
