use common::build_index_sequence;
use proc_macro2::TokenStream;
use quote::quote;

use crate::util::{parse_count, parse_list, sequence_error};

/// Spells `value` as nested `S<...<Z>>`.
pub fn nat_type(krate: &TokenStream, value: usize) -> TokenStream {
    (0..value).fold(quote! { #krate::nat::Z }, |inner, _| {
        quote! { #krate::nat::S<#inner> }
    })
}

/// Folds `elements` into a `Cons<_, ... Nil>` list, first element outermost.
pub fn sequence_type(krate: &TokenStream, elements: &[TokenStream]) -> TokenStream {
    elements
        .iter()
        .rev()
        .fold(quote! { #krate::seq::Nil }, |tail, head| {
            quote! { #krate::seq::Cons<#head, #tail> }
        })
}

pub fn canonical_sequence_type(krate: &TokenStream, len: usize) -> syn::Result<TokenStream> {
    let sequence = build_index_sequence(len);
    sequence.check(len).map_err(sequence_error)?;
    let elements: Vec<_> = sequence
        .iter()
        .map(|&index| nat_type(krate, index))
        .collect();
    Ok(sequence_type(krate, &elements))
}

pub fn nat(krate: &TokenStream, input: TokenStream) -> syn::Result<TokenStream> {
    Ok(nat_type(krate, parse_count(input)?))
}

pub fn index_sequence(krate: &TokenStream, input: TokenStream) -> syn::Result<TokenStream> {
    canonical_sequence_type(krate, parse_count(input)?)
}

pub fn indices(krate: &TokenStream, input: TokenStream) -> syn::Result<TokenStream> {
    let elements: Vec<_> = parse_list(input)?
        .into_iter()
        .map(|index| nat_type(krate, index))
        .collect();
    Ok(sequence_type(krate, &elements))
}
