//! Value-level index sequences.
//!
//! These mirror the type-level sequences in `unpack` with plain `usize`
//! lists. The proc macros build their per-arity code from them, so the
//! divide-and-conquer construction here runs at compile time of any crate
//! that expands those macros.

use alloc::vec::Vec;
use core::ops::Deref;

use snafu::prelude::*;

#[derive(Snafu, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[snafu(display("expected a sequence of length {expected}, found length {found}"))]
    LengthMismatch { expected: usize, found: usize },
    #[snafu(display("position {position} holds index {found}, expected {position}"))]
    Misplaced { position: usize, found: usize },
}

/// An ordered list of slot indices.
///
/// A `Sequence` is not required to be canonical: shifting one produces
/// indices that start past zero. Use [`Sequence::check`] to validate the
/// `0..n` shape.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Sequence {
    indices: Vec<usize>,
}

impl Sequence {
    pub const fn empty() -> Self {
        Sequence {
            indices: Vec::new(),
        }
    }

    pub fn from_values(indices: Vec<usize>) -> Self {
        Sequence { indices }
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    /// Adds `offset` to every index.
    pub fn shifted(mut self, offset: usize) -> Self {
        for index in self.indices.iter_mut() {
            *index += offset;
        }
        self
    }

    /// Appends `other`, offsetting its indices by `self.len()`.
    pub fn concat(self, other: Sequence) -> Self {
        concat(self, other)
    }

    /// Checks that this is exactly `0, 1, ..., len - 1`.
    pub fn check(&self, len: usize) -> Result<(), SequenceError> {
        ensure!(
            self.indices.len() == len,
            LengthMismatchSnafu {
                expected: len,
                found: self.indices.len(),
            }
        );
        for (position, &found) in self.indices.iter().enumerate() {
            ensure!(found == position, MisplacedSnafu { position, found });
        }
        Ok(())
    }

    pub fn is_canonical(&self) -> bool {
        self.check(self.indices.len()).is_ok()
    }
}

impl Deref for Sequence {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        &self.indices
    }
}

impl FromIterator<usize> for Sequence {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Sequence {
            indices: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Sequence {
    type Item = usize;
    type IntoIter = alloc::vec::IntoIter<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.indices.into_iter()
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a usize;
    type IntoIter = core::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.indices.iter()
    }
}

/// Splits `len` into `(len / 2, len - len / 2)`; the low half never exceeds
/// the high half.
pub const fn halves(len: usize) -> (usize, usize) {
    (len / 2, len - len / 2)
}

/// Joins two sequences, leaving `left` unchanged and shifting every index of
/// `right` by `left.len()`.
pub fn concat(left: Sequence, right: Sequence) -> Sequence {
    let offset = left.len();
    log::trace!("concatenating {} + {} indices", offset, right.len());
    let mut indices = left.indices;
    indices.reserve(right.len());
    indices.extend(right.indices.into_iter().map(|index| index + offset));
    Sequence { indices }
}

/// Builds `0, 1, ..., len - 1` by splitting `len` in half and concatenating
/// the two recursively built halves. Recursion depth is `O(log len)`.
pub fn build_index_sequence(len: usize) -> Sequence {
    match len {
        0 => Sequence::empty(),
        1 => Sequence::from_values(alloc::vec![0]),
        _ => {
            let (low, high) = halves(len);
            concat(build_index_sequence(low), build_index_sequence(high))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_build_base_cases() {
        assert!(build_index_sequence(0).is_empty());
        assert_eq!(build_index_sequence(1).as_slice(), &[0]);
        assert_eq!(build_index_sequence(5).as_slice(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_build_is_canonical() {
        for len in 0..=256 {
            let sequence = build_index_sequence(len);
            assert_eq!(sequence.len(), len);
            assert_eq!(sequence.check(len), Ok(()));
            assert!(sequence.iter().copied().eq(0..len));
        }
    }

    #[test]
    fn test_halves() {
        assert_eq!(halves(0), (0, 0));
        assert_eq!(halves(1), (0, 1));
        assert_eq!(halves(7), (3, 4));
        assert_eq!(halves(8), (4, 4));
        for len in 0..100 {
            let (low, high) = halves(len);
            assert!(low <= high);
            assert_eq!(low + high, len);
        }
    }

    #[test]
    fn test_concat_offsets_right() {
        let left = Sequence::from_values(vec![4, 1]);
        let right = Sequence::from_values(vec![0, 2, 9]);
        let joined = concat(left, right);
        assert_eq!(joined.as_slice(), &[4, 1, 2, 4, 11]);
    }

    #[test]
    fn test_concat_empty() {
        let right = build_index_sequence(3);
        assert_eq!(concat(Sequence::empty(), right.clone()), right);
        assert_eq!(concat(right.clone(), Sequence::empty()), right);
    }

    #[test]
    fn test_concat_associative() {
        for (a, b, c) in [(0, 0, 0), (1, 2, 3), (3, 0, 2), (5, 4, 1)] {
            let (x, y, z) = (
                build_index_sequence(a),
                build_index_sequence(b),
                build_index_sequence(c),
            );
            let left = x.clone().concat(y.clone()).concat(z.clone());
            let right = x.concat(y.concat(z));
            assert_eq!(left, right);
            assert_eq!(left, build_index_sequence(a + b + c));
        }
    }

    #[test]
    fn test_shifted() {
        let sequence = build_index_sequence(3).shifted(2);
        assert_eq!(sequence.as_slice(), &[2, 3, 4]);
        assert!(!sequence.is_canonical());
    }

    #[test]
    fn test_check_errors() {
        let gap = Sequence::from_values(vec![0, 2]);
        assert_eq!(
            gap.check(2),
            Err(SequenceError::Misplaced {
                position: 1,
                found: 2
            })
        );

        let duplicate: Sequence = [0, 0, 1].into_iter().collect();
        assert_eq!(
            duplicate.check(3),
            Err(SequenceError::Misplaced {
                position: 1,
                found: 0
            })
        );

        assert_eq!(
            build_index_sequence(4).check(5),
            Err(SequenceError::LengthMismatch {
                expected: 5,
                found: 4
            })
        );
    }

    #[test]
    fn test_error_display() {
        let err = SequenceError::Misplaced {
            position: 3,
            found: 7,
        };
        assert_eq!(
            alloc::format!("{err}"),
            "position 3 holds index 7, expected 3"
        );
    }
}
