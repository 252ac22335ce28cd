//! Code generation for the Record derive
//!
//! Emits one `impl ::fieldrules::foundation::Record` per input type:
//! a `KIND`, a `const` descriptor table, and a `field_value` accessor whose
//! match arms cover only `pub` string fields.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Field, Fields, Index, Member, Visibility};

use super::parse::rules_from_attributes;
use crate::types::{TypeCategory, detect_type};

/// Generate the `Record` implementation for a struct, enum or union.
///
/// # Errors
///
/// Returns an error if a `#[validate]` attribute does not hold a string
/// literal.
pub(super) fn generate_record(input: &DeriveInput) -> syn::Result<TokenStream> {
    match &input.data {
        Data::Struct(data) => generate_struct(input, &data.fields),
        Data::Enum(_) => Ok(generate_non_struct(input, &quote!(Enum))),
        Data::Union(_) => Ok(generate_non_struct(input, &quote!(Union))),
    }
}

fn generate_non_struct(input: &DeriveInput, kind: &TokenStream) -> TokenStream {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        impl #impl_generics ::fieldrules::foundation::Record for #name #ty_generics #where_clause {
            const KIND: ::fieldrules::foundation::Kind = ::fieldrules::foundation::Kind::#kind;
        }
    }
}

fn generate_struct(input: &DeriveInput, fields: &Fields) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut descriptors = Vec::new();
    let mut accessors = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        let rules = rules_from_attributes(&field.attrs)?;
        let category = detect_type(&field.ty);
        let exported = matches!(field.vis, Visibility::Public(_));
        let member = field_member(field, index);

        descriptors.push(generate_descriptor(field, &member, category, exported, &rules));

        // Private fields never get an arm, so their values stay unreadable.
        if exported {
            if let Some(accessor) = generate_accessor(&member, category) {
                accessors.push(quote! {
                    #index => ::fieldrules::foundation::FieldValue::Str(#accessor),
                });
            }
        }
    }

    let field_value = if accessors.is_empty() {
        quote! {
            fn field_value(&self, _index: usize) -> ::fieldrules::foundation::FieldValue<'_> {
                ::fieldrules::foundation::FieldValue::Opaque
            }
        }
    } else {
        quote! {
            fn field_value(&self, index: usize) -> ::fieldrules::foundation::FieldValue<'_> {
                match index {
                    #(#accessors)*
                    _ => ::fieldrules::foundation::FieldValue::Opaque,
                }
            }
        }
    };

    Ok(quote! {
        impl #impl_generics ::fieldrules::foundation::Record for #name #ty_generics #where_clause {
            const KIND: ::fieldrules::foundation::Kind = ::fieldrules::foundation::Kind::Struct;

            const FIELDS: &'static [::fieldrules::foundation::FieldDescriptor] = &[
                #(#descriptors),*
            ];

            #field_value
        }
    })
}

/// `self.name` for named fields, `self.0` for tuple fields.
fn field_member(field: &Field, index: usize) -> Member {
    match &field.ident {
        Some(ident) => Member::Named(ident.clone()),
        None => Member::Unnamed(Index::from(index)),
    }
}

fn generate_descriptor(
    field: &Field,
    member: &Member,
    category: TypeCategory,
    exported: bool,
    rules: &str,
) -> TokenStream {
    let name = match member {
        Member::Named(ident) => ident.unraw().to_string(),
        Member::Unnamed(index) => index.index.to_string(),
    };
    let type_name = compact_type_name(&field.ty.to_token_stream().to_string());
    let field_type = if category.is_string() {
        quote!(::fieldrules::foundation::FieldType::String)
    } else {
        quote!(::fieldrules::foundation::FieldType::Other)
    };

    quote! {
        ::fieldrules::foundation::FieldDescriptor {
            name: #name,
            type_name: #type_name,
            field_type: #field_type,
            exported: #exported,
            rules: #rules,
        }
    }
}

/// Drops the token-separator spaces `to_string` inserts, so `& 'a str`
/// becomes `&'a str` and `Vec < u8 >` becomes `Vec<u8>`. A space survives
/// only between two word characters, and `,`/`;` get one trailing space.
fn compact_type_name(rendered: &str) -> String {
    let is_word = |c: char| c.is_alphanumeric() || c == '_' || c == '\'';
    let chars: Vec<char> = rendered.chars().collect();
    let mut out = String::with_capacity(rendered.len());

    for (i, &c) in chars.iter().enumerate() {
        if c == ' ' {
            let prev = out.chars().next_back();
            let next = chars.get(i + 1).copied();
            if matches!((prev, next), (Some(p), Some(n)) if is_word(p) && is_word(n)) {
                out.push(' ');
            }
            continue;
        }
        out.push(c);
        if matches!(c, ',' | ';') {
            out.push(' ');
        }
    }

    out.trim_end().to_owned()
}

/// Expression borrowing the field as `&str`, or `None` for non-string types.
fn generate_accessor(member: &Member, category: TypeCategory) -> Option<TokenStream> {
    match category {
        TypeCategory::String => Some(quote! { self.#member.as_str() }),
        TypeCategory::StrRef | TypeCategory::StrPointer => Some(quote! { &*self.#member }),
        TypeCategory::Other => None,
    }
}
