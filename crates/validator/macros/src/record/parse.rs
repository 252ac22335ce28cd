//! Parsing of #[validate(...)] attributes

use syn::{Attribute, Expr, ExprLit, Lit, LitStr, Meta};

/// Collects the rule string attached to a field.
///
/// Accepts `#[validate("...")]` and `#[validate = "..."]`. Several attributes
/// on one field are joined with a single space, in source order. A field
/// without the attribute gets an empty rule string.
pub(super) fn rules_from_attributes(attrs: &[Attribute]) -> syn::Result<String> {
    let mut parts = Vec::new();

    for attr in attrs {
        if !attr.path().is_ident("validate") {
            continue;
        }

        let lit = match &attr.meta {
            Meta::List(_) => attr.parse_args::<LitStr>().map_err(|err| {
                syn::Error::new(
                    err.span(),
                    "expected a rule string, e.g. #[validate(\"min:3 max:20\")]",
                )
            })?,
            Meta::NameValue(meta) => match &meta.value {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(lit), ..
                }) => lit.clone(),
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "expected a string literal, e.g. #[validate = \"min:3\"]",
                    ));
                }
            },
            Meta::Path(path) => {
                return Err(syn::Error::new_spanned(
                    path,
                    "missing rule string, e.g. #[validate(\"len:5\")]",
                ));
            }
        };

        parts.push(lit.value());
    }

    Ok(parts.join(" "))
}
