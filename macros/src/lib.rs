use proc_macro::TokenStream;

mod tuple;
mod types;
mod util;

type Generator = fn(
    &proc_macro2::TokenStream,
    proc_macro2::TokenStream,
) -> syn::Result<proc_macro2::TokenStream>;

fn expand(item: TokenStream, generate: Generator) -> TokenStream {
    util::unpack_path()
        .and_then(|krate| generate(&krate, item.into()))
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Type-level natural for an integer literal: `nat!(2)` is `S<S<Z>>`.
#[proc_macro]
pub fn nat(item: TokenStream) -> TokenStream {
    expand(item, types::nat)
}

/// Type of the canonical index sequence `0..N`, built at expansion time by
/// splitting `N` in half and concatenating the halves.
#[proc_macro]
pub fn index_sequence(item: TokenStream) -> TokenStream {
    expand(item, types::index_sequence)
}

/// Type of an arbitrary index sequence: `indices![2, 0]`.
#[proc_macro]
pub fn indices(item: TokenStream) -> TokenStream {
    expand(item, types::indices)
}

#[proc_macro]
pub fn tuple_impls(item: TokenStream) -> TokenStream {
    expand(item, tuple::tuple)
}

#[proc_macro]
pub fn unpack_impls(item: TokenStream) -> TokenStream {
    expand(item, tuple::unpack)
}

#[proc_macro]
pub fn const_impls(item: TokenStream) -> TokenStream {
    expand(item, tuple::consts)
}
