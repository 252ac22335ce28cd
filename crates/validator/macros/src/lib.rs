//! Procedural macros for `fieldrules`
//!
//! - **`#[derive(Record)]`** - compile-time field descriptor table and
//!   string accessors for the rule engine
//!
//! # Architecture
//!
//! - `record/` - Record derive implementation
//! - `types` - field type classification

use proc_macro::TokenStream;

mod record;
mod types;

// ============================================================================
// RECORD DERIVE
// ============================================================================

/// Derives `fieldrules::foundation::Record` for a struct, enum or union.
///
/// # Attributes
///
/// Rules are attached per field with `#[validate(...)]`, holding a
/// whitespace-separated list of `name:argument` clauses:
///
/// - `#[validate("min:3")]` - length at least 3
/// - `#[validate("max:20")]` - length at most 20
/// - `#[validate("len:2")]` - length exactly 2
/// - `#[validate = "min:3 max:20"]` - name-value form
///
/// Repeated attributes on one field are joined with a space. Clauses are not
/// checked at compile time: a malformed argument is reported by the engine
/// when the record is validated.
///
/// # What gets generated
///
/// - Structs (named, tuple or unit): `Kind::Struct`, one descriptor per field
///   in declaration order, and a `field_value` accessor that exposes only
///   `pub` string fields.
/// - Enums and unions: `Kind::Enum` / `Kind::Union` with no fields, so
///   validating them fails with `NotAStruct`.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldrules::Record;
///
/// #[derive(Record)]
/// struct Account {
///     #[validate("min:3 max:16")]
///     pub login: String,
///
///     #[validate("len:2")]
///     pub locale: &'static str,
///
///     // Reported as an unexported-field violation.
///     #[validate("min:8")]
///     password: String,
/// }
/// ```
#[proc_macro_derive(Record, attributes(validate))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record_impl(input)
}
