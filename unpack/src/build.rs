//! Divide-and-conquer construction of canonical index sequences.
//!
//! `N` is split into `N / 2` and `N - N / 2`, both halves are built
//! recursively and the results concatenated, the second offset by the
//! first's length. `Build` impls nest `O(log N)` deep; the `Halve` and
//! `Plus` steps beneath them still peel one or two units at a time.

use crate::nat::{Const, Halve, High, Low, Nat, NatOf, ToNat, S, Z};
use crate::seq::{Concat, Concatenated, Cons, IndexSequence, Nil};

pub trait Build: Nat {
    type Output: IndexSequence;
}

impl Build for Z {
    type Output = Nil;
}

impl Build for S<Z> {
    type Output = Cons<Z, Nil>;
}

impl<N> Build for S<S<N>>
where
    N: Nat,
    S<S<N>>: Halve,
    Low<S<S<N>>>: Build,
    High<S<S<N>>>: Build,
    MakeIndexSequence<Low<S<S<N>>>>: Concat<MakeIndexSequence<High<S<S<N>>>>>,
{
    type Output =
        Concatenated<MakeIndexSequence<Low<S<S<N>>>>, MakeIndexSequence<High<S<S<N>>>>>;
}

/// The canonical sequence `0..N` for a type-level `N`.
pub type MakeIndexSequence<N> = <N as Build>::Output;

pub fn build<N: Build>() -> MakeIndexSequence<N> {
    Default::default()
}

/// The canonical sequence `0..N` for a `usize` constant.
///
/// ```
/// use unpack::{build_index_sequence, IndexSequence};
///
/// let sequence = build_index_sequence::<5>();
/// assert_eq!(sequence.to_sequence().as_slice(), &[0, 1, 2, 3, 4]);
/// ```
pub fn build_index_sequence<const N: usize>() -> MakeIndexSequence<NatOf<N>>
where
    Const<N>: ToNat,
    NatOf<N>: Build,
{
    Default::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{index_sequence, nat};
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn test_base_cases() {
        let _: Nil = build_index_sequence::<0>();
        let _: Cons<Z, Nil> = build_index_sequence::<1>();
        assert!(<MakeIndexSequence<Z>>::indices().is_empty());
        assert_eq!(<MakeIndexSequence<nat!(1)>>::indices(), vec![0]);
    }

    #[test]
    fn test_build_five() {
        let sequence = build_index_sequence::<5>();
        assert_eq!(sequence.to_sequence().as_slice(), &[0, 1, 2, 3, 4]);
        let _: index_sequence!(5) = sequence;
    }

    macro_rules! check_canonical {
        ($($n:tt),*) => {
            $(
                let built = build_index_sequence::<$n>();
                let _: index_sequence!($n) = built;
                assert_eq!(built.to_sequence().check($n), Ok(()));
                assert_eq!(<<MakeIndexSequence<NatOf<$n>> as IndexSequence>::Len as Nat>::VALUE, $n);
            )*
        };
    }

    #[test]
    fn test_every_supported_length() {
        check_canonical!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12);
    }

    #[test]
    fn test_beyond_const_bridge() {
        // `build` takes any natural; only the `usize` bridge is bounded.
        let built = build::<nat!(20)>();
        let _: index_sequence!(20) = built;
        assert_eq!(built.to_sequence(), common::build_index_sequence(20));
    }

    #[test]
    fn test_macro_ceiling() {
        type Longest = index_sequence!(64);
        assert_eq!(Longest::LEN, 64);
        assert_eq!(Longest::indices(), (0..64).collect::<Vec<_>>());
        assert_eq!(Longest::default().to_sequence().check(64), Ok(()));
    }
}
