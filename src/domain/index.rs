//! Positional index into the displayed person list
//!
//! Users see one-based positions; storage works with zero-based offsets.
//! An index is only checked against the list size when a command executes.

use std::fmt;
use std::num::NonZeroUsize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index {
    zero_based: usize,
}

impl Index {
    /// Creates an index from a zero-based offset
    pub fn from_zero_based(zero_based: usize) -> Self {
        Self { zero_based }
    }

    /// Creates an index from a one-based position
    pub fn from_one_based(one_based: NonZeroUsize) -> Self {
        Self {
            zero_based: one_based.get() - 1,
        }
    }

    pub fn zero_based(&self) -> usize {
        self.zero_based
    }

    pub fn one_based(&self) -> usize {
        self.zero_based + 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}
