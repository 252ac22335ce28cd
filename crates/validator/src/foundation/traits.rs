//! Introspection traits for validated values
//!
//! The engine never reflects over values at runtime. Instead each type
//! describes itself through [`Record`]: its [`Kind`], a static table of
//! [`FieldDescriptor`]s, and an index-based accessor that yields a
//! [`FieldValue`] view of one field.
//!
//! `#[derive(Record)]` generates all three for structs, enums and unions.
//! Built-in types (primitives, strings, collections, tuples) implement the
//! trait with a non-struct kind and no fields.

use crate::foundation::{Error, FieldType, Kind};

// ============================================================================
// FIELD DESCRIPTOR
// ============================================================================

/// Compile-time metadata for one struct field.
///
/// The table produced by `#[derive(Record)]` lists fields in declaration
/// order, which is also the order violations are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    /// Field identifier, or the positional index for tuple structs.
    pub name: &'static str,

    /// Declared type as written in source, with token spacing normalised
    /// (`&'static str`, `Vec<u8>`).
    pub type_name: &'static str,

    /// Whether length rules apply to this field.
    pub field_type: FieldType,

    /// `true` only for `pub` fields.
    pub exported: bool,

    /// Whitespace-separated `name[:argument]` clauses from `#[validate(...)]`.
    pub rules: &'static str,
}

impl FieldDescriptor {
    /// Returns true if the field carries a non-empty rule string.
    #[must_use]
    pub const fn has_rules(&self) -> bool {
        !self.rules.is_empty()
    }
}

// ============================================================================
// FIELD VALUE
// ============================================================================

/// Borrowed view of a field's current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// A string field.
    Str(&'a str),
    /// Any field the engine may not or cannot inspect.
    Opaque,
}

impl<'a> FieldValue<'a> {
    /// The string contents, if this is a string field.
    #[must_use]
    pub const fn as_str(&self) -> Option<&'a str> {
        match self {
            Self::Str(s) => Some(*s),
            Self::Opaque => None,
        }
    }
}

// ============================================================================
// RECORD
// ============================================================================

/// A value that can describe its own fields to the rule engine.
///
/// # Examples
///
/// Manual implementation (normally generated by `#[derive(Record)]`):
///
/// ```rust
/// use fieldrules::foundation::{FieldDescriptor, FieldType, FieldValue, Kind, Record};
///
/// struct Login {
///     pub user: String,
/// }
///
/// impl Record for Login {
///     const KIND: Kind = Kind::Struct;
///     const FIELDS: &'static [FieldDescriptor] = &[FieldDescriptor {
///         name: "user",
///         type_name: "String",
///         field_type: FieldType::String,
///         exported: true,
///         rules: "min:3",
///     }];
///
///     fn field_value(&self, index: usize) -> FieldValue<'_> {
///         match index {
///             0 => FieldValue::Str(&self.user),
///             _ => FieldValue::Opaque,
///         }
///     }
/// }
///
/// assert!(fieldrules::validate(&Login { user: "ab".into() }).is_err());
/// ```
pub trait Record {
    /// Runtime shape of this type.
    const KIND: Kind;

    /// Field table in declaration order. Empty for non-struct kinds.
    const FIELDS: &'static [FieldDescriptor] = &[];

    /// Value of the field at `index` in [`FIELDS`](Record::FIELDS).
    ///
    /// Implementations return [`FieldValue::Opaque`] for non-string and
    /// non-`pub` fields, and for out-of-range indices.
    fn field_value(&self, index: usize) -> FieldValue<'_> {
        let _ = index;
        FieldValue::Opaque
    }
}

/// Method-call sugar over [`validate`](crate::validate).
pub trait RecordExt: Record {
    /// Validates `self` with the default configuration.
    fn validate(&self) -> Result<(), Error> {
        crate::validate(self)
    }
}

impl<T: Record + ?Sized> RecordExt for T {}
