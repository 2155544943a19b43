//! Type-level natural numbers.
//!
//! `Z` is zero and `S<N>` is `N + 1`. All arithmetic happens in trait
//! resolution; the types themselves are zero-sized.

use core::marker::PhantomData;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Z;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct S<N>(PhantomData<N>);

pub trait Nat: Default + Copy + 'static {
    const VALUE: usize;
}

impl Nat for Z {
    const VALUE: usize = 0;
}

impl<N: Nat> Nat for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

pub trait Plus<Rhs: Nat>: Nat {
    type Output: Nat;
}

impl<N: Nat> Plus<Z> for N {
    type Output = N;
}

impl<N: Nat, M: Nat> Plus<S<M>> for N
where
    N: Plus<M>,
{
    type Output = S<<N as Plus<M>>::Output>;
}

pub type Sum<A, B> = <A as Plus<B>>::Output;

/// Splits a natural into `Low = N / 2` and `High = N - N / 2`.
pub trait Halve: Nat {
    type Low: Nat;
    type High: Nat;
}

impl Halve for Z {
    type Low = Z;
    type High = Z;
}

impl Halve for S<Z> {
    type Low = Z;
    type High = S<Z>;
}

// (n + 2) / 2 = n / 2 + 1, and the remainder grows by one as well.
impl<N: Halve> Halve for S<S<N>> {
    type Low = S<N::Low>;
    type High = S<N::High>;
}

pub type Low<N> = <N as Halve>::Low;
pub type High<N> = <N as Halve>::High;

/// Carrier for a `usize` const generic so it can be mapped to a `Nat`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Const<const N: usize>;

pub trait ToNat {
    type Output: Nat;
}

pub type NatOf<const N: usize> = <Const<N> as ToNat>::Output;

macros::const_impls!(12);
