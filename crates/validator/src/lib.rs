//! # fieldrules
//!
//! Declarative per-field rule validation for plain Rust structs.
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldrules::prelude::*;
//!
//! #[derive(Record)]
//! struct Signup {
//!     #[validate("min:3 max:20")]
//!     pub username: String,
//!
//!     #[validate("len:2")]
//!     pub country: String,
//! }
//!
//! let signup = Signup {
//!     username: "al".into(),
//!     country: "DEU".into(),
//! };
//!
//! let err = fieldrules::validate(&signup).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "username: invalid validator syntax\ncountry: invalid validator syntax"
//! );
//! ```
//!
//! ## Rules
//!
//! A field's rule string is a whitespace-separated list of `name:argument`
//! clauses. On `String`-like fields the engine understands:
//!
//! - `min:N`: length must be at least `N`
//! - `max:N`: length must be at most `N`
//! - `len:N`: length must be exactly `N`
//!
//! Other rule names are ignored, and fields of any other type are skipped.
//! A rule string on a non-`pub` field is itself a violation.
//!
//! ## Errors
//!
//! [`validate`] fails fast with [`Error::NotAStruct`] for non-struct values;
//! otherwise it collects every violation into [`ValidationErrors`], which
//! renders as one line per violation.

// Lets `#[derive(Record)]` output, which names `::fieldrules`, compile
// inside this crate's own tests.
extern crate self as fieldrules;

pub mod config;
mod engine;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod rules;

pub use config::ValidatorConfig;
pub use engine::Validator;
pub use foundation::{
    Error, ErrorKind, FieldDescriptor, FieldType, FieldValue, Kind, Record, RecordExt,
    ValidationError, ValidationErrors, ValidationResult,
};
pub use rules::LengthMode;

#[cfg(feature = "derive")]
pub use fieldrules_macros::Record;

/// Validates `record` with the default configuration.
///
/// # Errors
///
/// See [`Validator::validate`].
pub fn validate<R: Record + ?Sized>(record: &R) -> ValidationResult {
    Validator::default().validate(record)
}
