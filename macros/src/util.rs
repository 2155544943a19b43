use common::SequenceError;
use proc_macro2::{Span, TokenStream};
use proc_macro_crate::{crate_name, FoundCrate};
use quote::quote;
use syn::{punctuated::Punctuated, Ident, LitInt, Token};

/// Largest natural the macros will spell out.
pub const MAX_NAT: usize = 64;

pub fn unpack_path() -> syn::Result<TokenStream> {
    let found_crate = crate_name("unpack").map_err(|e| {
        syn::Error::new(
            Span::call_site(),
            format!("unable to locate `unpack` in `Cargo.toml`: {e}"),
        )
    })?;

    // `unpack` declares `extern crate self as unpack`, so the absolute path
    // also resolves inside the crate and its own tests.
    match found_crate {
        FoundCrate::Itself => Ok(quote! { ::unpack }),
        FoundCrate::Name(name) => {
            let ident = Ident::new(&name, Span::call_site());
            Ok(quote! { ::#ident })
        }
    }
}

pub fn sequence_error(err: SequenceError) -> syn::Error {
    syn::Error::new(Span::call_site(), err.to_string())
}

fn bounded(lit: &LitInt) -> syn::Result<usize> {
    let value: usize = lit.base10_parse()?;
    if value > MAX_NAT {
        return Err(syn::Error::new(
            lit.span(),
            format!("{value} exceeds the supported maximum of {MAX_NAT}"),
        ));
    }
    Ok(value)
}

/// Parses a single integer literal such as `12`.
pub fn parse_count(input: TokenStream) -> syn::Result<usize> {
    let lit: LitInt = syn::parse2(input)?;
    bounded(&lit)
}

/// Parses a comma separated list of integer literals such as `2, 0, 1`.
pub fn parse_list(input: TokenStream) -> syn::Result<Vec<usize>> {
    let parser = Punctuated::<LitInt, Token![,]>::parse_terminated;
    let list = syn::parse::Parser::parse2(parser, input)?;
    list.iter().map(bounded).collect()
}
