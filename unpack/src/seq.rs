//! Type-level index sequences.
//!
//! A sequence is a cons list of naturals: `Cons<Z, Cons<S<Z>, Nil>>` holds
//! `0, 1`. Sequences are zero-sized and only ever exist to select tuple
//! slots; [`IndexSequence::indices`] reads the values back for inspection.

use alloc::vec::Vec;
use core::marker::PhantomData;

use common::Sequence;

use crate::nat::{Nat, Plus, Sum, S, Z};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nil;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cons<H, T>(PhantomData<(H, T)>);

pub trait IndexSequence: Default + Copy + 'static {
    /// Number of elements, as a natural.
    type Len: Nat;

    const LEN: usize;

    fn push_indices(out: &mut Vec<usize>);

    fn indices() -> Vec<usize> {
        let mut out = Vec::with_capacity(Self::LEN);
        Self::push_indices(&mut out);
        out
    }

    fn to_sequence(self) -> Sequence {
        Sequence::from_values(Self::indices())
    }
}

impl IndexSequence for Nil {
    type Len = Z;
    const LEN: usize = 0;

    fn push_indices(_: &mut Vec<usize>) {}
}

impl<H: Nat, T: IndexSequence> IndexSequence for Cons<H, T> {
    type Len = S<T::Len>;
    const LEN: usize = T::LEN + 1;

    fn push_indices(out: &mut Vec<usize>) {
        out.push(H::VALUE);
        T::push_indices(out);
    }
}

/// Adds `K` to every element.
pub trait Shift<K: Nat>: IndexSequence {
    type Output: IndexSequence;
}

impl<K: Nat> Shift<K> for Nil {
    type Output = Nil;
}

impl<K: Nat, H, T> Shift<K> for Cons<H, T>
where
    H: Plus<K>,
    T: Shift<K>,
{
    type Output = Cons<Sum<H, K>, <T as Shift<K>>::Output>;
}

pub type Shifted<Q, K> = <Q as Shift<K>>::Output;

/// Joins two sequences without touching their elements.
pub trait Append<Rhs: IndexSequence>: IndexSequence {
    type Output: IndexSequence;
}

impl<Rhs: IndexSequence> Append<Rhs> for Nil {
    type Output = Rhs;
}

impl<Rhs: IndexSequence, H: Nat, T> Append<Rhs> for Cons<H, T>
where
    T: Append<Rhs>,
{
    type Output = Cons<H, <T as Append<Rhs>>::Output>;
}

/// Joins two sequences, offsetting every element of `Rhs` by the length of
/// `Self`. Two canonical sequences `0..a` and `0..b` concatenate to the
/// canonical `0..a + b`.
pub trait Concat<Rhs: IndexSequence>: IndexSequence {
    type Output: IndexSequence;
}

impl<Lhs, Rhs> Concat<Rhs> for Lhs
where
    Lhs: IndexSequence + Append<Shifted<Rhs, <Lhs as IndexSequence>::Len>>,
    Rhs: Shift<<Lhs as IndexSequence>::Len>,
{
    type Output = <Lhs as Append<Shifted<Rhs, <Lhs as IndexSequence>::Len>>>::Output;
}

pub type Concatenated<A, B> = <A as Concat<B>>::Output;

pub fn concat<A, B>(_: A, _: B) -> Concatenated<A, B>
where
    A: Concat<B>,
    B: IndexSequence,
{
    Default::default()
}

pub trait ReverseOnto<Acc: IndexSequence>: IndexSequence {
    type Output: IndexSequence;
}

impl<Acc: IndexSequence> ReverseOnto<Acc> for Nil {
    type Output = Acc;
}

impl<Acc: IndexSequence, H: Nat, T> ReverseOnto<Acc> for Cons<H, T>
where
    T: ReverseOnto<Cons<H, Acc>>,
{
    type Output = <T as ReverseOnto<Cons<H, Acc>>>::Output;
}

pub trait Reverse: IndexSequence {
    type Output: IndexSequence;
}

impl<Q: ReverseOnto<Nil>> Reverse for Q {
    type Output = <Q as ReverseOnto<Nil>>::Output;
}

pub type Reversed<Q> = <Q as Reverse>::Output;

pub fn reverse<Q: Reverse>(_: Q) -> Reversed<Q> {
    Default::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{index_sequence, indices, nat};
    use alloc::vec;

    #[test]
    fn test_indices() {
        assert!(Nil::indices().is_empty());
        assert_eq!(<indices![3, 1, 4]>::indices(), vec![3, 1, 4]);
        assert_eq!(<indices![3, 1, 4]>::LEN, 3);
        assert_eq!(<<indices![3, 1, 4] as IndexSequence>::Len as Nat>::VALUE, 3);
    }

    #[test]
    fn test_shift() {
        assert_eq!(<Shifted<indices![0, 2], nat!(3)>>::indices(), vec![3, 5]);
        assert_eq!(<Shifted<Nil, nat!(3)>>::LEN, 0);
        let _: indices![1, 2] = <Shifted<index_sequence!(2), nat!(1)>>::default();
    }

    #[test]
    fn test_concat_offsets_right() {
        type Joined = Concatenated<indices![1, 0], indices![0, 2, 1]>;
        assert_eq!(Joined::indices(), vec![1, 0, 2, 4, 3]);
        let _: indices![1, 0, 2, 4, 3] = Joined::default();
    }

    #[test]
    fn test_concat_canonical() {
        let joined = concat(<index_sequence!(3)>::default(), <index_sequence!(4)>::default());
        let _: index_sequence!(7) = joined;
        assert_eq!(joined.to_sequence().check(7), Ok(()));
    }

    #[test]
    fn test_concat_empty() {
        let _: index_sequence!(3) = <Concatenated<Nil, index_sequence!(3)>>::default();
        let _: index_sequence!(3) = <Concatenated<index_sequence!(3), Nil>>::default();
        let _: Nil = <Concatenated<Nil, Nil>>::default();
    }

    #[test]
    fn test_concat_associative() {
        type A = index_sequence!(2);
        type B = index_sequence!(3);
        type C = indices![1, 0];

        type Left = Concatenated<Concatenated<A, B>, C>;
        type Right = Concatenated<A, Concatenated<B, C>>;

        let _: Left = Right::default();
        assert_eq!(Left::indices(), Right::indices());
        assert_eq!(Left::indices(), vec![0, 1, 2, 3, 4, 6, 5]);
    }

    #[test]
    fn test_reverse() {
        let reversed = reverse(<index_sequence!(4)>::default());
        let _: indices![3, 2, 1, 0] = reversed;
        let _: Nil = reverse(Nil);
        assert_eq!(<Reversed<indices![5]>>::indices(), vec![5]);
    }
}
