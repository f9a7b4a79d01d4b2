//! The separator-interleaving delegate.
//!
//! [`SeparatedBuilderDelegate`] presents a list of items with separators
//! between them through the same contract the host pipeline uses for plain
//! lists, so virtualization, recycling, semantic indexing, and keep-alive
//! behaviors keep working unmodified. Callers supply the two producers and
//! the logical item count; the delegate owns the index remapping.

use std::fmt;
use std::rc::Rc;

use crate::builder_delegate::ChildBuilderDelegate;
use crate::child_delegate::{ChildBehavior, ChildDelegate, ChildKey};
use crate::interleave::{combined_len, semantic_index_at, slot_at, Slot};

/// A delegate that interleaves separators between items.
///
/// N items expose `2N - 1` combined children: items at even combined
/// indices, separators at odd ones. The separator producer is called with
/// the index of the gap it fills, so separator `i` renders between items
/// `i` and `i + 1` and is never called for the gap after the last item.
///
/// Internally this composes a plain [`ChildBuilderDelegate`] covering the
/// combined index space; every contract method forwards to it, which is
/// what keeps the host pipeline unaware that separators exist.
///
/// # Example
///
/// ```rust,ignore
/// let delegate = SeparatedBuilderDelegate::new(
///     messages.len(),
///     move |cx, index| message_row(cx, &messages[index]),
///     move |cx, _index| divider(cx),
/// )
/// .with_item_keys(move |index| message_ids[index])
/// .with_separator_content_type(DIVIDER_TYPE);
/// ```
pub struct SeparatedBuilderDelegate<Cx, El> {
    inner: ChildBuilderDelegate<Cx, El>,
    item_count: usize,
    // Kept so either content-type setter can rewire the combined callback
    // with both halves present.
    item_content_type: Option<Rc<dyn Fn(usize) -> u64>>,
    separator_content_type: Option<u64>,
}

impl<Cx, El> SeparatedBuilderDelegate<Cx, El> {
    /// Creates a delegate over `item_count` items with separators between
    /// them.
    ///
    /// # Arguments
    /// * `item_count` - Number of logical items (not counting separators)
    /// * `item_builder` - Produces the item at a logical item index in
    ///   `0..item_count`
    /// * `separator_builder` - Produces the separator at a logical separator
    ///   index in `0..item_count - 1`
    pub fn new<I, S>(item_count: usize, item_builder: I, separator_builder: S) -> Self
    where
        I: Fn(&mut Cx, usize) -> El + 'static,
        S: Fn(&mut Cx, usize) -> El + 'static,
    {
        let inner = ChildBuilderDelegate::new(combined_len(item_count), move |cx, index| {
            match slot_at(index) {
                Slot::Item(item_index) => item_builder(cx, item_index),
                Slot::Separator(separator_index) => separator_builder(cx, separator_index),
            }
        })
        .with_semantic_indexes(semantic_index_at);

        Self {
            inner,
            item_count,
            item_content_type: None,
            separator_content_type: None,
        }
    }

    /// Number of logical items.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Number of separators (one fewer than the items, floored at zero).
    #[inline]
    pub fn separator_count(&self) -> usize {
        self.item_count.saturating_sub(1)
    }

    /// The underlying plain delegate covering the combined index space.
    pub fn inner(&self) -> &ChildBuilderDelegate<Cx, El> {
        &self.inner
    }

    /// Sets a stable key callback for items.
    ///
    /// Keys are generated from logical item indices and surface at even
    /// combined indices. Separators keep their default index keys: a
    /// separator's identity is purely positional, so there is no caller
    /// state for a key to relocate.
    pub fn with_item_keys<F>(mut self, key: F) -> Self
    where
        F: Fn(usize) -> u64 + 'static,
    {
        self.inner = self.inner.with_keys(move |index| match slot_at(index) {
            Slot::Item(item_index) => Some(key(item_index)),
            Slot::Separator(_) => None,
        });
        self
    }

    /// Sets a content-type callback for items, keyed by logical item index.
    pub fn with_item_content_types<F>(mut self, content_type: F) -> Self
    where
        F: Fn(usize) -> u64 + 'static,
    {
        self.item_content_type = Some(Rc::new(content_type));
        self.rewire_content_types()
    }

    /// Sets the content type shared by every separator.
    ///
    /// Separators are usually all the same element, so a single type lets
    /// the host recycle any separator into any other.
    pub fn with_separator_content_type(mut self, content_type: u64) -> Self {
        self.separator_content_type = Some(content_type);
        self.rewire_content_types()
    }

    /// Sets a relocation callback, forwarded to the underlying delegate
    /// unchanged.
    ///
    /// The callback reasons in combined-index terms: it receives the keys
    /// this delegate exposes and answers with combined indices.
    pub fn with_find_index<F>(mut self, find_index: F) -> Self
    where
        F: Fn(ChildKey) -> Option<usize> + 'static,
    {
        self.inner = self.inner.with_find_index(find_index);
        self
    }

    /// Sets the pass-through behavior flags, forwarded to the underlying
    /// delegate unchanged.
    pub fn with_behavior(mut self, behavior: ChildBehavior) -> Self {
        self.inner = self.inner.with_behavior(behavior);
        self
    }

    fn rewire_content_types(mut self) -> Self {
        let item_content_type = self.item_content_type.clone();
        let separator_content_type = self.separator_content_type;
        self.inner = self
            .inner
            .with_content_types(move |index| match slot_at(index) {
                Slot::Item(item_index) => {
                    item_content_type.as_ref().map(|type_fn| type_fn(item_index))
                }
                Slot::Separator(_) => separator_content_type,
            });
        self
    }
}

impl<Cx, El> ChildDelegate<Cx, El> for SeparatedBuilderDelegate<Cx, El> {
    fn child_count(&self) -> usize {
        self.inner.child_count()
    }

    fn build(&self, cx: &mut Cx, index: usize) -> Option<El> {
        self.inner.build(cx, index)
    }

    fn get_key(&self, index: usize) -> ChildKey {
        self.inner.get_key(index)
    }

    fn get_content_type(&self, index: usize) -> Option<u64> {
        self.inner.get_content_type(index)
    }

    fn get_semantic_index(&self, index: usize) -> Option<usize> {
        self.inner.get_semantic_index(index)
    }

    fn get_index(&self, key: ChildKey) -> Option<usize> {
        self.inner.get_index(key)
    }

    fn behavior(&self) -> ChildBehavior {
        self.inner.behavior()
    }
}

impl<Cx, El> fmt::Debug for SeparatedBuilderDelegate<Cx, El> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeparatedBuilderDelegate")
            .field("item_count", &self.item_count)
            .field("child_count", &self.inner.child_count())
            .finish_non_exhaustive()
    }
}
