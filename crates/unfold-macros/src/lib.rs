//! Procedural macros for Unfold.
//!
//! This crate provides `#[derive(ButtonContent)]`, which implements
//! `unfold_core::ButtonContent` for field-less enums.
//!
//! # Attributes
//!
//! ## `#[button_content(image = path)]`
//!
//! Enum-level attribute naming a function `fn(&Self) -> Option<DisplayImage>`
//! that supplies each variant's button image. Without it, variants have no
//! image.
//!
//! ```ignore
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ButtonContent)]
//! #[button_content(image = Flash::icon)]
//! enum Flash {
//!     Auto,
//!     On,
//!     Off = 10,
//! }
//! ```
//!
//! # Indices
//!
//! Each variant's index is its discriminant: an explicit integer literal, or
//! one more than the previous variant's index (the first defaults to 0).
//! Duplicate indices are rejected at compile time, which keeps
//! `from_index(item.index()) == Some(item)` true for every variant.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse_macro_input, Attribute, Data, DeriveInput, Expr, ExprLit, ExprPath, ExprUnary, Fields,
    Ident, Lit, UnOp,
};

/// Derive `ButtonContent` for a field-less enum.
///
/// This macro generates:
/// - `all_values()` listing the variants in declaration order
/// - `index()` / `from_index()` mapping variants to their discriminants
/// - `display_image()` forwarding to the `image` function, if one is given
#[proc_macro_derive(ButtonContent, attributes(button_content))]
pub fn derive_button_content(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match impl_derive_button_content(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Parsed enum-level `#[button_content(...)]` attributes.
struct ContentAttrs {
    image: Option<ExprPath>,
}

/// A variant together with its resolved index.
struct VariantInfo {
    ident: Ident,
    index: i64,
}

fn impl_derive_button_content(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let enum_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let attrs = parse_content_attrs(&input.attrs)?;

    let data = match &input.data {
        Data::Enum(data) => data,
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "ButtonContent derive only supports enums",
            ));
        }
    };

    let mut variants: Vec<VariantInfo> = Vec::with_capacity(data.variants.len());
    let mut next_index: i64 = 0;

    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "ButtonContent derive only supports variants without fields",
            ));
        }

        let index = match &variant.discriminant {
            Some((_, expr)) => parse_discriminant(expr)?,
            None => next_index,
        };

        if let Some(existing) = variants.iter().find(|v| v.index == index) {
            return Err(syn::Error::new_spanned(
                variant,
                format!(
                    "variant `{}` has index {} which is already used by `{}`",
                    variant.ident, index, existing.ident
                ),
            ));
        }

        next_index = index.checked_add(1).ok_or_else(|| {
            syn::Error::new_spanned(variant, "discriminant overflows the index range")
        })?;

        variants.push(VariantInfo {
            ident: variant.ident.clone(),
            index,
        });
    }

    let all_values = variants.iter().map(|v| {
        let ident = &v.ident;
        quote! { Self::#ident }
    });

    let index_arms = variants.iter().map(|v| {
        let ident = &v.ident;
        let index = v.index;
        quote! { Self::#ident => #index }
    });

    let from_index_arms = variants.iter().map(|v| {
        let ident = &v.ident;
        let index = v.index;
        quote! { #index => ::std::option::Option::Some(Self::#ident) }
    });

    // An uninhabited enum has no arms to match on.
    let index_body = if variants.is_empty() {
        quote! { match *self {} }
    } else {
        quote! {
            match self {
                #(#index_arms,)*
            }
        }
    };

    let display_image = attrs.image.map(|path| {
        quote! {
            fn display_image(&self) -> ::std::option::Option<::unfold_core::DisplayImage> {
                #path(self)
            }
        }
    });

    let expanded = quote! {
        impl #impl_generics ::unfold_core::ButtonContent for #enum_name #ty_generics #where_clause {
            fn all_values() -> ::std::vec::Vec<Self> {
                ::std::vec![#(#all_values),*]
            }

            fn index(&self) -> i64 {
                #index_body
            }

            fn from_index(index: i64) -> ::std::option::Option<Self> {
                match index {
                    #(#from_index_arms,)*
                    _ => ::std::option::Option::None,
                }
            }

            #display_image
        }
    };

    Ok(expanded)
}

/// Parse enum-level #[button_content(...)] attributes.
fn parse_content_attrs(attrs: &[Attribute]) -> syn::Result<ContentAttrs> {
    let mut result = ContentAttrs { image: None };

    for attr in attrs {
        if !attr.path().is_ident("button_content") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("image") {
                result.image = Some(meta.value()?.parse()?);
                Ok(())
            } else {
                Err(meta.error("unsupported button_content attribute, expected `image = path`"))
            }
        })?;
    }

    Ok(result)
}

/// Read an integer literal discriminant, optionally negated.
fn parse_discriminant(expr: &Expr) -> syn::Result<i64> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Int(lit), ..
        }) => lit.base10_parse::<i64>(),
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_),
            expr: inner,
            ..
        }) => parse_discriminant(inner).map(|value| -value),
        Expr::Group(group) => parse_discriminant(&group.expr),
        Expr::Paren(paren) => parse_discriminant(&paren.expr),
        _ => Err(syn::Error::new_spanned(
            expr,
            "ButtonContent discriminants must be integer literals",
        )),
    }
}
