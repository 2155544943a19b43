use common::build_index_sequence;
use proc_macro2::{Literal, TokenStream};
use quote::{format_ident, quote};
use syn::Ident;

use crate::types::{nat_type, sequence_type};
use crate::util::{parse_count, sequence_error};

fn slot_params(arity: usize) -> Vec<Ident> {
    (0..arity).map(|i| format_ident!("T{}", i)).collect()
}

fn index_params(len: usize) -> Vec<Ident> {
    (0..len).map(|i| format_ident!("I{}", i)).collect()
}

/// `Tuple` and `Get<I>` for every tuple arity up to `max_arity`.
pub fn tuple_impls(krate: &TokenStream, max_arity: usize) -> syn::Result<TokenStream> {
    let mut impls = TokenStream::new();
    for arity in 0..=max_arity {
        let params = slot_params(arity);
        let len = nat_type(krate, arity);
        let value = Literal::usize_unsuffixed(arity);
        impls.extend(quote! {
            impl<#(#params),*> #krate::tuple::Tuple for (#(#params,)*) {
                type Len = #len;
                const ARITY: usize = #value;
            }
        });

        let sequence = build_index_sequence(arity);
        sequence.check(arity).map_err(sequence_error)?;
        for &index in sequence.iter() {
            let slot = &params[index];
            let position = nat_type(krate, index);
            let field = syn::Index::from(index);
            impls.extend(quote! {
                impl<#(#params),*> #krate::tuple::Get<#position> for (#(#params,)*) {
                    type Output = #slot;

                    #[inline]
                    fn get(&self) -> &Self::Output {
                        &self.#field
                    }
                }
            });
        }
    }
    Ok(impls)
}

/// `Unpack` and `Select` for every index sequence length up to `max_len`.
///
/// The impls are generic over the element naturals, so one impl per length
/// covers canonical, shifted, reversed and hand-written sequences alike.
pub fn unpack_impls(krate: &TokenStream, max_len: usize) -> syn::Result<TokenStream> {
    let mut impls = TokenStream::new();
    for len in 0..=max_len {
        let indices = index_params(len);
        let elements: Vec<_> = indices.iter().map(|index| quote! { #index }).collect();
        let sequence = sequence_type(krate, &elements);
        let slots: Vec<_> = indices
            .iter()
            .map(|index| quote! { <T as #krate::tuple::Get<#index>>::Output })
            .collect();
        let gets: Vec<_> = indices
            .iter()
            .map(|index| quote! { <T as #krate::tuple::Get<#index>>::get(tuple) })
            .collect();

        impls.extend(quote! {
            impl<'t, T, F, R, #(#indices),*> #krate::apply::Unpack<'t, T, F, R> for #sequence
            where
                T: 't,
                #(#indices: #krate::nat::Nat,)*
                #(T: #krate::tuple::Get<#indices>,)*
                F: FnOnce(#(&'t #slots),*) -> R,
            {
                #[inline]
                #[allow(unused_variables)]
                fn unpack(self, tuple: &'t T, f: F) -> R {
                    f(#(#gets),*)
                }
            }

            impl<'t, T, #(#indices),*> #krate::apply::Select<'t, T> for #sequence
            where
                T: 't,
                #(#indices: #krate::nat::Nat,)*
                #(T: #krate::tuple::Get<#indices>,)*
            {
                type Output = (#(&'t #slots,)*);

                #[inline]
                #[allow(unused_variables)]
                fn select(self, tuple: &'t T) -> Self::Output {
                    (#(#gets,)*)
                }
            }
        });
    }
    Ok(impls)
}

/// `ToNat` for `Const<N>` with `N` up to `max`.
pub fn const_impls(krate: &TokenStream, max: usize) -> syn::Result<TokenStream> {
    let mut impls = TokenStream::new();
    for value in 0..=max {
        let nat = nat_type(krate, value);
        let value = Literal::usize_unsuffixed(value);
        impls.extend(quote! {
            impl #krate::nat::ToNat for #krate::nat::Const<#value> {
                type Output = #nat;
            }
        });
    }
    Ok(impls)
}

pub fn tuple(krate: &TokenStream, input: TokenStream) -> syn::Result<TokenStream> {
    tuple_impls(krate, parse_count(input)?)
}

pub fn unpack(krate: &TokenStream, input: TokenStream) -> syn::Result<TokenStream> {
    unpack_impls(krate, parse_count(input)?)
}

pub fn consts(krate: &TokenStream, input: TokenStream) -> syn::Result<TokenStream> {
    const_impls(krate, parse_count(input)?)
}
