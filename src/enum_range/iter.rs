//! Iterator on enumerator ranges.
use std::iter::FusedIterator;

use num_traits::{CheckedAdd, One, Zero};

use crate::{EnumRange, Enumerated};

/// Iterator for walking enumerator values, created by [`EnumRange::iter`].
///
/// The iterator is always in one of two states: positioned on a value, or
/// exhausted. [`Default`] produces the exhausted state directly, and an
/// exhausted iterator stays exhausted under further stepping. Two iterators
/// compare equal iff both are exhausted, or both are positioned on the same
/// underlying value.
#[derive(Clone, Copy, Debug)]
pub struct Iter<E: Enumerated> {
    cur: Option<E>,
    last: E::Repr,
}

impl<E: Enumerated> Iter<E> {
    /// Creates a new iterator positioned at `start`, walking up to `range`'s
    /// upper bound.
    pub fn new(range: &EnumRange<E>, start: E) -> Self {
        Self {
            cur: Some(start),
            last: range.last().to_repr(),
        }
    }

    /// Returns the value the iterator is positioned on, or [`None`] if
    /// exhausted.
    pub fn get(&self) -> Option<E> {
        self.cur
    }

    fn step(&self, cur: E) -> Option<E> {
        let mut repr = cur.to_repr();
        loop {
            repr = repr.checked_add(&E::Repr::one())?;
            if repr > self.last {
                return None;
            }
            if let Some(x) = E::from_repr(repr) {
                return Some(x);
            }
        }
    }
}

impl<E: Enumerated> Default for Iter<E> {
    fn default() -> Self {
        Self {
            cur: None,
            last: E::Repr::zero(),
        }
    }
}

impl<E: Enumerated> PartialEq for Iter<E> {
    fn eq(&self, other: &Self) -> bool {
        match (self.cur, other.cur) {
            (Some(a), Some(b)) => a.to_repr() == b.to_repr(),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<E: Enumerated> Eq for Iter<E> {}

impl<E: Enumerated> Iterator for Iter<E> {
    type Item = E;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        let x = self.cur?;
        self.cur = self.step(x);
        Some(x)
    }
}

impl<E: Enumerated> FusedIterator for Iter<E> {}
