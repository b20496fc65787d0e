//!
//! Macros for the main crate.
//!

mod utils;

use proc_macro::TokenStream as Tokens;
use quote::quote;
use syn::parse_macro_input;
use utils::{get_struct_member_where_type, is_named_type, variant_path};

///
/// ## Positioned
///
/// Implements `crate::common::Positioned` for a lexeme type.
///
/// * On a `struct`, the field whose type is `Position` is returned.
/// * On an `enum`, every variant must wrap exactly one positioned
///   value, which the implementation forwards to.
///
/// ### Example
///
/// ```ignore
/// use eson_macros::Positioned;
///
/// #[derive(Positioned)]
/// struct Comma {
///     position: Position,
/// }
///
/// #[derive(Positioned)]
/// enum Punctuation {
///     Comma(Comma),
///     Mapping(Mapping),
/// }
/// ```
///
#[proc_macro_derive(Positioned)]
pub fn positioned(target: Tokens) -> Tokens {
    let target: syn::Item = parse_macro_input!(target);

    let expanded = match &target {
        syn::Item::Struct(st) => positioned_struct(st),
        syn::Item::Enum(en) => positioned_enum(en),
        other => Err(syn::Error::new_spanned(
            other,
            "Only structs and enums can derive `Positioned`.",
        )),
    };

    expanded
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn positioned_struct(st: &syn::ItemStruct) -> syn::Result<proc_macro2::TokenStream> {
    let Some(field) =
        get_struct_member_where_type(st, |ty| is_named_type(ty, "Position"))
    else {
        return Err(syn::Error::new_spanned(
            &st.ident,
            "Expected a field of type `Position`.",
        ));
    };

    let ident = &st.ident;
    let (impl_generics, ty_generics, where_clause) = st.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics crate::common::Positioned for #ident #ty_generics #where_clause {
            fn position(&self) -> crate::common::Position {
                #field
            }
        }
    })
}

fn positioned_enum(en: &syn::ItemEnum) -> syn::Result<proc_macro2::TokenStream> {
    let arms = en
        .variants
        .iter()
        .map(|var| match &var.fields {
            syn::Fields::Unnamed(syn::FieldsUnnamed { unnamed, .. }) if unnamed.len() == 1 => {
                let path = variant_path(&var.ident);
                Ok(quote! {
                    #path(inner) => crate::common::Positioned::position(inner),
                })
            }
            _ => Err(syn::Error::new_spanned(
                var,
                "Each variant must wrap exactly one positioned value.",
            )),
        })
        .collect::<syn::Result<Vec<_>>>()?;

    let ident = &en.ident;
    let (impl_generics, ty_generics, where_clause) = en.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics crate::common::Positioned for #ident #ty_generics #where_clause {
            fn position(&self) -> crate::common::Position {
                match self {
                    #(#arms)*
                }
            }
        }
    })
}
