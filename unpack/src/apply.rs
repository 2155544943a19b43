//! Calling a function with a tuple's slots as its arguments.
//!
//! `apply` builds the canonical sequence for the tuple's arity and hands it
//! to [`Unpack`], whose per-length impls (from `macros::unpack_impls!`)
//! borrow each named slot and splice the borrows into a single call. All of
//! it resolves during type checking; at runtime only the call remains.
//!
//! A callable whose parameter count differs from the tuple's arity does not
//! compile:
//!
//! ```compile_fail
//! fn sum2(a: &i32, b: &i32) -> i32 {
//!     a + b
//! }
//!
//! unpack::apply(sum2, &(1, 2, 3));
//! ```
//!
//! and neither does one whose parameter types differ from the slot types:
//!
//! ```compile_fail
//! fn shout(word: &String, times: &usize) -> String {
//!     word.repeat(*times)
//! }
//!
//! unpack::apply(shout, &("hey", 3usize));
//! ```

use crate::build::{build, Build, MakeIndexSequence};
use crate::seq::IndexSequence;
use crate::tuple::Tuple;

/// Invokes `f` with the slots of a tuple named by `Self`, in sequence order.
pub trait Unpack<'t, T: 't, F, R>: IndexSequence {
    fn unpack(self, tuple: &'t T, f: F) -> R;
}

/// Borrows the slots of a tuple named by `Self` into a tuple of references.
pub trait Select<'t, T: 't>: IndexSequence {
    type Output;

    fn select(self, tuple: &'t T) -> Self::Output;
}

macros::unpack_impls!(12);

/// Calls `f` once with a shared reference to every slot of `tuple`, left to
/// right, and returns what `f` returns.
///
/// ```
/// fn sum3(a: &i32, b: &i32, c: &i32) -> i32 {
///     a + b + c
/// }
///
/// assert_eq!(unpack::apply(sum3, &(1, 2, 3)), 6);
/// ```
#[inline]
pub fn apply<'t, F, T, R>(f: F, tuple: &'t T) -> R
where
    T: Tuple,
    T::Len: Build,
    MakeIndexSequence<T::Len>: Unpack<'t, T, F, R>,
{
    build::<T::Len>().unpack(tuple, f)
}

/// Calls `f` with the slots of `tuple` named by `indices`, in that order.
///
/// ```
/// use unpack::{apply_indexed, indices};
///
/// let pair = ("left", "right");
/// let swapped = apply_indexed(
///     |a: &&str, b: &&str| [*a, *b].join(" "),
///     &pair,
///     <indices![1, 0]>::default(),
/// );
/// assert_eq!(swapped, "right left");
/// ```
#[inline]
pub fn apply_indexed<'t, F, T, I, R>(f: F, tuple: &'t T, indices: I) -> R
where
    I: Unpack<'t, T, F, R>,
{
    indices.unpack(tuple, f)
}

/// Borrows the slots of `tuple` named by `indices`.
///
/// ```
/// use unpack::{indices, select};
///
/// let tuple = (1, 'a', "x");
/// assert_eq!(select(&tuple, <indices![2, 0]>::default()), (&"x", &1));
/// ```
#[inline]
pub fn select<'t, T, I>(tuple: &'t T, indices: I) -> I::Output
where
    I: Select<'t, T>,
{
    indices.select(tuple)
}

/// Method form of [`apply()`]: `(1, 2).apply(f)`.
pub trait Apply: Tuple + Sized {
    #[inline]
    fn apply<'t, F, R>(&'t self, f: F) -> R
    where
        Self::Len: Build,
        MakeIndexSequence<Self::Len>: Unpack<'t, Self, F, R>,
    {
        build::<Self::Len>().unpack(self, f)
    }
}

impl<T: Tuple> Apply for T {}
