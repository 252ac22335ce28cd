//! `Record` implementations for standard library types
//!
//! Every type here reports a non-struct [`Kind`], so validating it directly
//! yields [`Error::NotAStruct`](crate::foundation::Error::NotAStruct).
//! References and smart pointers are transparent.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use crate::foundation::{FieldDescriptor, FieldValue, Kind, Record};
use crate::macros::{record_forward, record_kind, record_kind_generic, record_tuple};

record_kind!(Bool => bool);
record_kind!(Char => char);
record_kind!(Int => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
record_kind!(Float => f32, f64);
record_kind!(String => String, str);
record_kind!(Unit => ());

record_kind_generic!(Sequence => Vec<T>, VecDeque<T>);
record_kind_generic!(Map => HashMap<K, V, S>, BTreeMap<K, V>);
record_kind_generic!(Set => HashSet<T, S>, BTreeSet<T>);
record_kind_generic!(Option => Option<T>);

record_tuple!(
    (A),
    (A, B),
    (A, B, C),
    (A, B, C, D),
    (A, B, C, D, E),
    (A, B, C, D, E, F),
);

record_forward!(Box, Rc, Arc);

impl<T> Record for [T] {
    const KIND: Kind = Kind::Sequence;
}

impl<T, const N: usize> Record for [T; N] {
    const KIND: Kind = Kind::Sequence;
}

impl Record for Cow<'_, str> {
    const KIND: Kind = Kind::String;
}

impl<T: Record + ?Sized> Record for &T {
    const KIND: Kind = T::KIND;
    const FIELDS: &'static [FieldDescriptor] = T::FIELDS;

    #[inline]
    fn field_value(&self, index: usize) -> FieldValue<'_> {
        (**self).field_value(index)
    }
}

impl<T: Record + ?Sized> Record for &mut T {
    const KIND: Kind = T::KIND;
    const FIELDS: &'static [FieldDescriptor] = T::FIELDS;

    #[inline]
    fn field_value(&self, index: usize) -> FieldValue<'_> {
        (**self).field_value(index)
    }
}
