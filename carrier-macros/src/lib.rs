//! Procedural macros for Carrier.
//!
//! - `#[derive(Event)]` - implements `carrier::Event` from an
//!   `#[event(type = "...")]` attribute

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod event;

/// Derive macro for implementing the `Event` trait.
///
/// ```rust,ignore
/// #[derive(Event, Deserialize)]
/// #[event(type = "user.signedup")]
/// struct UserSignedUp {
///     id: String,
/// }
///
/// assert_eq!(UserSignedUp::EVENT_TYPE, "user.signedup");
/// ```
///
/// Use `#[event(type = "...", crate = "path")]` when the `carrier` crate is
/// renamed or only `carrier-core` is a dependency.
#[proc_macro_derive(Event, attributes(event))]
pub fn derive_event(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    event::derive_event_impl(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
