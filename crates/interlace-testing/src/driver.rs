//! Driver that exercises a delegate the way a host list pipeline does.
//!
//! This module provides a driver-style testing API that allows tests to:
//! - Walk a delegate's combined index space in build order
//! - Build visible sub-ranges, as a scrolling viewport would
//! - Collect keys, semantic indexes, and relocation answers
//!
//! # Example
//!
//! ```rust,ignore
//! use interlace_testing::{ListDriver, Probe};
//!
//! let mut probe = Probe::new();
//! let driver = ListDriver::new(&delegate);
//!
//! let elements = driver.build_all(&mut probe);
//! driver.assert_keys_round_trip();
//! ```

use std::marker::PhantomData;
use std::ops::Range;

use interlace_foundation::{ChildDelegate, ChildKey};

/// Walks a [`ChildDelegate`] with the same call pattern a host pipeline
/// uses: count first, then sequential build requests over a range.
///
/// The driver borrows the delegate and never mutates it; only the build
/// context passed to [`build_all`] / [`build_range`] accumulates state.
///
/// [`build_all`]: ListDriver::build_all
/// [`build_range`]: ListDriver::build_range
pub struct ListDriver<'a, Cx, El, D>
where
    D: ChildDelegate<Cx, El> + ?Sized,
{
    delegate: &'a D,
    _marker: PhantomData<fn(&mut Cx) -> El>,
}

impl<'a, Cx, El, D> ListDriver<'a, Cx, El, D>
where
    D: ChildDelegate<Cx, El> + ?Sized,
{
    pub fn new(delegate: &'a D) -> Self {
        Self {
            delegate,
            _marker: PhantomData,
        }
    }

    /// Combined child count as the host would read it.
    pub fn child_count(&self) -> usize {
        self.delegate.child_count()
    }

    /// Builds every child in order, front to back.
    pub fn build_all(&self, cx: &mut Cx) -> Vec<El> {
        self.build_range(cx, 0..self.delegate.child_count())
    }

    /// Builds the children in `range`, as a viewport over that slice of the
    /// list would. Indexes the delegate answers `None` for are skipped.
    pub fn build_range(&self, cx: &mut Cx, range: Range<usize>) -> Vec<El> {
        range
            .filter_map(|index| self.delegate.build(cx, index))
            .collect()
    }

    /// Collects the key of every child in build order.
    pub fn keys(&self) -> Vec<ChildKey> {
        (0..self.delegate.child_count())
            .map(|index| self.delegate.get_key(index))
            .collect()
    }

    /// Collects `(combined index, semantic index)` pairs for every child.
    pub fn semantic_map(&self) -> Vec<(usize, Option<usize>)> {
        (0..self.delegate.child_count())
            .map(|index| (index, self.delegate.get_semantic_index(index)))
            .collect()
    }

    /// Asks the delegate to relocate a key, as the host does after the data
    /// source changed underneath it.
    pub fn relocate(&self, key: ChildKey) -> Option<usize> {
        self.delegate.get_index(key)
    }

    /// Asserts that every child's key relocates back to its own index.
    ///
    /// # Panics
    /// Panics on the first index whose key does not round-trip.
    pub fn assert_keys_round_trip(&self) {
        for index in 0..self.delegate.child_count() {
            let key = self.delegate.get_key(index);
            assert_eq!(
                self.delegate.get_index(key),
                Some(index),
                "key {:?} at index {} did not relocate to itself",
                key,
                index
            );
        }
    }
}
