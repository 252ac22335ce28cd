//! Internal macros for implementing [`Record`](crate::foundation::Record) on
//! built-in types.
//!
//! # Available Macros
//!
//! - `record_kind!`: plain types reporting a fixed [`Kind`](crate::foundation::Kind)
//! - `record_kind_generic!`: generic containers (`Vec<T>`, `HashMap<K, V>`, ...)
//! - `record_tuple!`: tuples of the listed arities
//! - `record_forward!`: smart pointers that describe their pointee
//!
//! None of these types have fields, so only `KIND` is set and the default
//! `FIELDS` / `field_value` apply.

// ============================================================================
// PLAIN TYPES
// ============================================================================

/// Implements `Record` for each listed type with the given kind.
///
/// ```rust,ignore
/// record_kind!(Int => i8, i16, i32);
/// ```
macro_rules! record_kind {
    ($kind:ident => $($ty:ty),+ $(,)?) => {
        $(
            impl $crate::foundation::Record for $ty {
                const KIND: $crate::foundation::Kind = $crate::foundation::Kind::$kind;
            }
        )+
    };
}

// ============================================================================
// GENERIC CONTAINERS
// ============================================================================

/// Implements `Record` for generic containers, leaving every type parameter
/// unbounded.
///
/// ```rust,ignore
/// record_kind_generic!(Map => HashMap<K, V, S>, BTreeMap<K, V>);
/// ```
macro_rules! record_kind_generic {
    ($kind:ident => $($ty:ident<$($param:ident),+>),+ $(,)?) => {
        $(
            impl<$($param),+> $crate::foundation::Record for $ty<$($param),+> {
                const KIND: $crate::foundation::Kind = $crate::foundation::Kind::$kind;
            }
        )+
    };
}

// ============================================================================
// TUPLES
// ============================================================================

/// Implements `Record` with `Kind::Tuple` for each parenthesised arity.
///
/// ```rust,ignore
/// record_tuple!((A), (A, B));
/// ```
macro_rules! record_tuple {
    ($(($($param:ident),+)),+ $(,)?) => {
        $(
            impl<$($param),+> $crate::foundation::Record for ($($param,)+) {
                const KIND: $crate::foundation::Kind = $crate::foundation::Kind::Tuple;
            }
        )+
    };
}

// ============================================================================
// FORWARDING
// ============================================================================

/// Implements `Record` for single-parameter pointers by delegating to the
/// pointee, so `Box<User>` validates like `User`.
///
/// ```rust,ignore
/// record_forward!(Box, Rc, Arc);
/// ```
macro_rules! record_forward {
    ($($ptr:ident),+ $(,)?) => {
        $(
            impl<T: $crate::foundation::Record + ?Sized> $crate::foundation::Record for $ptr<T> {
                const KIND: $crate::foundation::Kind = T::KIND;
                const FIELDS: &'static [$crate::foundation::FieldDescriptor] = T::FIELDS;

                #[inline]
                fn field_value(&self, index: usize) -> $crate::foundation::FieldValue<'_> {
                    (**self).field_value(index)
                }
            }
        )+
    };
}

pub(crate) use {record_forward, record_kind, record_kind_generic, record_tuple};
