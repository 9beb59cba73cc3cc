//! # rowcheck Core
//!
//! Core types for the rowcheck validation engine.
//!
//! This crate provides the building blocks shared by the engine, the rule-file
//! parser and the CLI: the [`Validator`] capability, column bindings, the
//! defect records produced by a check, and the configuration the engine runs
//! with.
//!
//! ## Key Concepts
//!
//! - **Validator**: an opaque predicate that accepts or rejects one field value
//! - **Column**: binds a validator to a zero-based field index
//! - **Defect**: either a shape error (wrong field count) or a content error
//!   (a validator rejected a field)
//! - **Reference width**: the field count of the first row read, used to judge
//!   every later row
//!
//! ## Example
//!
//! ```rust
//! use rowcheck_core::{Column, ValidationFailure, Validator};
//!
//! struct Digits;
//!
//! impl Validator for Digits {
//!     fn validate(&self, value: &str) -> Result<(), ValidationFailure> {
//!         if value.chars().all(|c| c.is_ascii_digit()) {
//!             Ok(())
//!         } else {
//!             Err(ValidationFailure::new(format!("'{}' is not all digits", value)))
//!         }
//!     }
//! }
//!
//! let column = Column::new(0, Digits);
//! assert_eq!(column.index(), 0);
//! assert!(column.validator().validate("123").is_ok());
//! ```

pub mod column;
pub mod config;
pub mod error;
pub mod report;
pub mod validator;

pub use column::*;
pub use config::*;
pub use error::*;
pub use report::*;
pub use validator::*;
