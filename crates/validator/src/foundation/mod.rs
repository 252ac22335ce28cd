//! Core types and traits
//!
//! This module contains the fundamental building blocks of the rule engine:
//!
//! - **Introspection**: [`Record`], [`FieldDescriptor`], [`FieldValue`]
//! - **Shapes**: [`Kind`], [`FieldType`]
//! - **Errors**: [`Error`], [`ErrorKind`], [`ValidationError`], [`ValidationErrors`]
//!
//! # Architecture
//!
//! ## 1. Compile-time metadata
//!
//! Field names, declared types, visibility and rule strings are captured by
//! `#[derive(Record)]` into a `const` table. At runtime the engine only walks
//! that table and asks the value for string views of individual fields.
//!
//! ```rust,ignore
//! #[derive(Record)]
//! struct Signup {
//!     #[validate("min:3 max:20")]
//!     pub username: String,
//! }
//!
//! assert_eq!(Signup::FIELDS[0].rules, "min:3 max:20");
//! ```
//!
//! ## 2. Structured errors
//!
//! Violations are values, not strings. Rendering is `Display`:
//!
//! ```rust,ignore
//! let error = ValidationError::new(ErrorKind::InvalidValidatorSyntax).with_field("username");
//! assert_eq!(error.to_string(), "username: invalid validator syntax");
//! ```

mod builtin;
pub mod category;
pub mod error;
pub mod traits;

pub use category::{FieldType, Kind};
pub use error::{Error, ErrorKind, ValidationError, ValidationErrors};
pub use traits::{FieldDescriptor, FieldValue, Record, RecordExt};

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// Result of validating one record.
pub type ValidationResult = Result<(), Error>;
