//!
//! Utilities for the derive macros.
//!

use syn::parse_quote;

///
/// Is `ty` a path whose last segment is `name`?
///
/// Matches both `Position` and `crate::common::Position`.
///
pub fn is_named_type(ty: &syn::Type, name: &str) -> bool {
    match ty {
        syn::Type::Path(syn::TypePath { path, .. }) => path
            .segments
            .last()
            .map(|segment| segment.ident == name)
            .unwrap_or(false),
        _ => false,
    }
}

///
/// Finds the first field of a struct whose type satisfies `pred`,
/// returning the expression `self.$field` for it.
///
pub fn get_struct_member_where_type(
    st: &syn::ItemStruct,
    pred: impl Fn(&syn::Type) -> bool,
) -> Option<syn::Expr> {
    st.fields
        .iter()
        .zip(0u32..)
        .find(|(field, _)| pred(&field.ty))
        .map(|(field, i)| {
            let member = match &field.ident {
                Some(ident) => syn::Member::Named(ident.clone()),
                None => syn::Member::Unnamed(syn::Index::from(i as usize)),
            };

            parse_quote!(self.#member)
        })
}

///
/// `Self::$variant`, for match arms.
///
pub fn variant_path(variant: &syn::Ident) -> syn::Path {
    parse_quote!(Self::#variant)
}
