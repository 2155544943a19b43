//! Slot access for native tuples.
//!
//! Implemented for every tuple up to arity 12 by `macros::tuple_impls!`.

use crate::nat::Nat;

pub trait Tuple {
    /// The arity as a natural.
    type Len: Nat;

    const ARITY: usize;
}

/// Borrows slot `I`.
pub trait Get<I: Nat>: Tuple {
    type Output;

    fn get(&self) -> &Self::Output;
}

macros::tuple_impls!(12);
