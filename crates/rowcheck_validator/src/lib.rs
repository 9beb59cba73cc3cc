//! # rowcheck Validator
//!
//! Validation engine for delimited text. This crate walks the rows of a
//! CSV-style source and collects every defect it finds, rather than stopping
//! at the first one:
//!
//! - Shape errors: a row's field count differs from the first row's
//! - Content errors: a field bound to a validator was rejected
//!
//! It also ships a set of built-in validators (non-empty, numeric range,
//! pattern, allowed values, length, integer, email, date).
//!
//! ## Example
//!
//! ```rust
//! use rowcheck_core::Column;
//! use rowcheck_validator::{Checker, NotEmpty};
//!
//! let mut checker = Checker::new(';', true);
//! checker.add_column(Column::new(1, NotEmpty));
//!
//! let csv = "id;name\n1;John\n2;\n";
//! let defects = checker.check(csv.as_bytes()).expect("readable input");
//!
//! assert_eq!(defects.len(), 1);
//! assert_eq!(defects[0].line(), 3);
//! ```

mod engine;
mod source;
mod validators;

pub use engine::*;
pub use validators::*;
