//! Combined-index arithmetic for separator-interleaved lists.
//!
//! A list of N items rendered with separators exposes a single combined
//! index space of `2N - 1` children to the host pipeline: items sit at even
//! indices, separators at odd indices, and both logical indices fall out of
//! an integer division by two. All of the remapping lives here so the
//! delegates themselves stay thin.

/// Identifies which producer a combined index resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// An item at the given logical item index.
    Item(usize),
    /// A separator at the given logical separator index.
    Separator(usize),
}

/// Returns the combined child count for a list of `item_count` items.
///
/// N items interleave with N - 1 separators, so the combined count is
/// `2N - 1` for N >= 1 and 0 for an empty list. Saturating arithmetic keeps
/// the empty case at 0 instead of underflowing.
#[inline]
pub fn combined_len(item_count: usize) -> usize {
    item_count.saturating_mul(2).saturating_sub(1)
}

/// Resolves a combined index to the producer slot it belongs to.
///
/// Parity is the sole discriminant: even indices are items, odd indices are
/// separators, and the logical index is the combined index divided by two
/// (truncating) in both cases.
#[inline]
pub fn slot_at(index: usize) -> Slot {
    if index % 2 == 0 {
        Slot::Item(index / 2)
    } else {
        Slot::Separator(index / 2)
    }
}

/// Returns the combined index at which the given item appears.
#[inline]
pub fn item_position(item_index: usize) -> usize {
    item_index.saturating_mul(2)
}

/// Returns the combined index at which the given separator appears.
///
/// Separator `i` sits between items `i` and `i + 1`.
#[inline]
pub fn separator_position(separator_index: usize) -> usize {
    separator_index.saturating_mul(2).saturating_add(1)
}

/// Accessibility position for a combined index.
///
/// Only items count toward accessibility order; separators are excluded
/// from enumeration entirely.
#[inline]
pub fn semantic_index_at(index: usize) -> Option<usize> {
    match slot_at(index) {
        Slot::Item(item_index) => Some(item_index),
        Slot::Separator(_) => None,
    }
}
