//! Prelude module for convenient imports.
//!
//! Provides a single `use fieldrules::prelude::*;` import that brings in the
//! traits, derive, and types needed to declare and check records.
//!
//! # Examples
//!
//! ```rust
//! use fieldrules::prelude::*;
//!
//! #[derive(Record)]
//! struct Code {
//!     #[validate("len:4")]
//!     pub value: String,
//! }
//!
//! assert!(Code { value: "A1B2".into() }.validate().is_ok());
//! ```

pub use crate::config::ValidatorConfig;
pub use crate::engine::Validator;
pub use crate::foundation::{
    Error, ErrorKind, Kind, Record, RecordExt, ValidationError, ValidationErrors,
};
pub use crate::rules::LengthMode;

#[cfg(feature = "derive")]
pub use fieldrules_macros::Record;
