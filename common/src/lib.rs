#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod sequence;

pub use sequence::{build_index_sequence, concat, halves, Sequence, SequenceError};
