//! Call a function with the slots of a tuple as its arguments.
//!
//! ```
//! fn sum3(a: &i32, b: &i32, c: &i32) -> i32 {
//!     a + b + c
//! }
//!
//! assert_eq!(unpack::apply(sum3, &(1, 2, 3)), 6);
//! ```
//!
//! The tuple's arity selects, at compile time, the index sequence `0..N`
//! ([`build()`]), which in turn selects the slots passed to the function
//! ([`apply()`]). Naturals and sequences are zero-sized types; nothing of them
//! survives to runtime.
#![no_std]

extern crate alloc;
extern crate self as unpack;

pub mod apply;
pub mod build;
pub mod nat;
pub mod seq;
pub mod tuple;

pub use apply::{apply, apply_indexed, select, Apply};
pub use build::{build, build_index_sequence, MakeIndexSequence};
pub use common::{Sequence, SequenceError};
pub use macros::{index_sequence, indices, nat};
pub use seq::{concat, reverse, Concatenated, IndexSequence};
pub use tuple::{Get, Tuple};
