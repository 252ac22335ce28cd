//! Runtime shape of a value and of its fields
//!
//! [`Kind`] is what a [`Record`](crate::foundation::Record) reports about
//! itself; only [`Kind::Struct`] is eligible for rule evaluation.
//! [`FieldType`] classifies a single struct field so the engine knows whether
//! length rules apply to it.

use std::fmt;

/// Shape reported by a [`Record`](crate::foundation::Record) implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Fixed-schema aggregate with fields. The only validatable kind.
    Struct,
    /// Sum type.
    Enum,
    /// Untagged union.
    Union,
    /// `bool`.
    Bool,
    /// `char`.
    Char,
    /// Any integer primitive.
    Int,
    /// `f32` / `f64`.
    Float,
    /// `String` / `str`.
    String,
    /// `Vec`, slices, arrays, `VecDeque`.
    Sequence,
    /// `HashMap` / `BTreeMap`.
    Map,
    /// `HashSet` / `BTreeSet`.
    Set,
    /// `Option<T>`.
    Option,
    /// Tuples.
    Tuple,
    /// `()`.
    Unit,
}

impl Kind {
    /// Lower-case name used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Struct => "struct",
            Self::Enum => "enum",
            Self::Union => "union",
            Self::Bool => "bool",
            Self::Char => "char",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::Sequence => "sequence",
            Self::Map => "map",
            Self::Set => "set",
            Self::Option => "option",
            Self::Tuple => "tuple",
            Self::Unit => "unit",
        }
    }

    /// Returns true for [`Kind::Struct`].
    #[must_use]
    pub const fn is_struct(self) -> bool {
        matches!(self, Self::Struct)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared type class of a struct field.
///
/// Rules are evaluated only against [`FieldType::String`] fields; everything
/// else is skipped whatever its rule string says.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// `String`, `&str`, `Cow<str>`, `Box<str>`, `Rc<str>`, `Arc<str>`.
    String,
    /// Anything else.
    Other,
}
