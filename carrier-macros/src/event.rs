//! `#[derive(Event)]` implementation.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, LitStr, Path};

/// Arguments collected from `#[event(...)]` attributes.
struct EventArgs {
    event_type: Option<LitStr>,
    krate: Option<Path>,
}

impl EventArgs {
    fn from_input(input: &DeriveInput) -> syn::Result<Self> {
        let mut args = EventArgs {
            event_type: None,
            krate: None,
        };

        for attr in input.attrs.iter().filter(|a| a.path().is_ident("event")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("type") {
                    let lit: LitStr = meta.value()?.parse()?;
                    if lit.value().is_empty() {
                        return Err(syn::Error::new(lit.span(), "event type must not be empty"));
                    }
                    args.event_type = Some(lit);
                    Ok(())
                } else if meta.path.is_ident("crate") {
                    let lit: LitStr = meta.value()?.parse()?;
                    args.krate = Some(lit.parse()?);
                    Ok(())
                } else {
                    Err(meta.error("unknown attribute, expected `type` or `crate`"))
                }
            })?;
        }

        Ok(args)
    }
}

pub(crate) fn derive_event_impl(input: DeriveInput) -> syn::Result<TokenStream> {
    let args = EventArgs::from_input(&input)?;
    let Some(event_type) = args.event_type else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "missing `#[event(type = \"...\")]` attribute",
        ));
    };
    let krate = args
        .krate
        .unwrap_or_else(|| syn::parse_quote!(::carrier));

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #krate::Event for #name #ty_generics #where_clause {
            const EVENT_TYPE: &'static str = #event_type;
        }
    })
}
