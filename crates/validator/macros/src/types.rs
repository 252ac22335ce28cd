//! Field type detection
//!
//! Classification is syntactic: the derive sees tokens, not resolved types,
//! so `String` means "a path whose last segment is `String`".

use syn::{GenericArgument, PathArguments, Type, TypePath};

/// How a field's declared type relates to string rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TypeCategory {
    /// `String`
    String,
    /// `&str`, `&mut str`, `&'a str`
    StrRef,
    /// `Cow<str>`, `Box<str>`, `Rc<str>`, `Arc<str>`
    StrPointer,
    /// Anything else
    Other,
}

impl TypeCategory {
    /// True if length rules apply to this type.
    pub(crate) const fn is_string(self) -> bool {
        !matches!(self, Self::Other)
    }
}

/// Main type detection function
pub(crate) fn detect_type(ty: &Type) -> TypeCategory {
    match ty {
        Type::Path(type_path) => detect_from_path(type_path),
        Type::Reference(type_ref) if is_str(&type_ref.elem) => TypeCategory::StrRef,
        Type::Group(group) => detect_type(&group.elem),
        Type::Paren(paren) => detect_type(&paren.elem),
        _ => TypeCategory::Other,
    }
}

fn detect_from_path(type_path: &TypePath) -> TypeCategory {
    if type_path.qself.is_some() {
        return TypeCategory::Other;
    }

    let Some(last_segment) = type_path.path.segments.last() else {
        return TypeCategory::Other;
    };

    match last_segment.ident.to_string().as_str() {
        "String" if last_segment.arguments.is_none() => TypeCategory::String,
        "Cow" | "Box" | "Rc" | "Arc" => match single_type_argument(&last_segment.arguments) {
            Some(inner) if is_str(inner) => TypeCategory::StrPointer,
            _ => TypeCategory::Other,
        },
        _ => TypeCategory::Other,
    }
}

/// The only type argument of `<...>`, skipping lifetimes (`Cow<'a, str>`).
fn single_type_argument(arguments: &PathArguments) -> Option<&Type> {
    let PathArguments::AngleBracketed(args) = arguments else {
        return None;
    };

    let mut types = args.args.iter().filter_map(|arg| match arg {
        GenericArgument::Type(ty) => Some(ty),
        _ => None,
    });

    match (types.next(), types.next()) {
        (Some(ty), None) => Some(ty),
        _ => None,
    }
}

fn is_str(ty: &Type) -> bool {
    match ty {
        Type::Path(type_path) => type_path.qself.is_none() && type_path.path.is_ident("str"),
        Type::Group(group) => is_str(&group.elem),
        Type::Paren(paren) => is_str(&paren.elem),
        _ => false,
    }
}
