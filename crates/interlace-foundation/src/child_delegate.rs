//! The child-delegate contract consumed by lazy list pipelines.
//!
//! This module defines the [`ChildDelegate`] trait which provides all needed
//! information about children for lazy composition and measurement, plus the
//! [`ChildKey`] identity type and the [`ChildBehavior`] pass-through flags.

/// Key for a child in a lazy list.
///
/// Separates user-provided keys from default index-based keys to prevent
/// collisions: a caller key of `0` on the first child can never be confused
/// with the default key of an unkeyed child at index 0, because the two live
/// in different enum variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChildKey {
    /// A key supplied by the caller's key callback.
    User(u64),
    /// The default key, derived from the child's combined index.
    Index(usize),
}

impl ChildKey {
    /// Returns true if this is a caller-supplied key.
    #[inline]
    pub fn is_user_key(self) -> bool {
        matches!(self, ChildKey::User(_))
    }

    /// Returns true if this is a default index-based key.
    #[inline]
    pub fn is_index_key(self) -> bool {
        matches!(self, ChildKey::Index(_))
    }
}

/// Pass-through flags a delegate carries for the host pipeline.
///
/// The host consults these when it wraps each built child: whether to
/// preserve per-child state across scroll-driven disposal, whether to
/// isolate each child's repainting, and whether children participate in
/// accessibility enumeration at all. Everything defaults to enabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChildBehavior {
    /// Preserve per-child state when a child is scrolled out and recycled.
    pub automatic_keep_alives: bool,
    /// Isolate each child's repainting from its siblings.
    pub repaint_boundaries: bool,
    /// Expose semantic indexes for accessibility ordering.
    pub semantic_indexes: bool,
}

impl Default for ChildBehavior {
    fn default() -> Self {
        Self {
            automatic_keep_alives: true,
            repaint_boundaries: true,
            semantic_indexes: true,
        }
    }
}

impl ChildBehavior {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn automatic_keep_alives(mut self, enabled: bool) -> Self {
        self.automatic_keep_alives = enabled;
        self
    }

    pub fn repaint_boundaries(mut self, enabled: bool) -> Self {
        self.repaint_boundaries = enabled;
        self
    }

    pub fn semantic_indexes(mut self, enabled: bool) -> Self {
        self.semantic_indexes = enabled;
        self
    }
}

/// Provides all the needed info about children which could be composed and
/// measured by a lazy list pipeline.
///
/// The pipeline calls two operations during layout: [`child_count`] to size
/// the scrollable range and [`build`] to produce the child at an index (or
/// learn that none exists). The remaining methods have defaults and exist so
/// delegates can expose identity, recycling, and accessibility metadata.
///
/// Implementations should be immutable - changes to the data source should
/// create a new delegate instance.
///
/// `Cx` is the host's build context, opaque to this crate; `El` is whatever
/// the host treats as a renderable element.
///
/// [`child_count`]: ChildDelegate::child_count
/// [`build`]: ChildDelegate::build
pub trait ChildDelegate<Cx, El> {
    /// The total number of children in the list (visible or not).
    fn child_count(&self) -> usize;

    /// Builds the child at the given index, or returns `None` if no child
    /// exists there.
    ///
    /// A failure inside the underlying producer is not caught here; it
    /// propagates to the host pipeline's own error boundary.
    fn build(&self, cx: &mut Cx, index: usize) -> Option<El>;

    /// Returns the key for the child at the given index.
    ///
    /// Keys are used to relocate a child's state when the build order
    /// changes. If not overridden, defaults to the index itself.
    fn get_key(&self, index: usize) -> ChildKey {
        ChildKey::Index(index)
    }

    /// Returns the content type for the child at the given index.
    ///
    /// Children with the same content type can be recycled into one another
    /// more efficiently. Returns `None` for children with no specific type
    /// (compatible with any).
    fn get_content_type(&self, index: usize) -> Option<u64> {
        let _ = index;
        None
    }

    /// Returns the semantic index for the child, or `None` if the child is
    /// excluded from accessibility enumeration.
    ///
    /// If not overridden, every child is enumerated in build order.
    fn get_semantic_index(&self, index: usize) -> Option<usize> {
        Some(index)
    }

    /// Returns the index of the child with the given key, or `None` if the
    /// key is not found.
    ///
    /// Used by the host to find a child's new position after the data source
    /// changed underneath it.
    fn get_index(&self, key: ChildKey) -> Option<usize> {
        // Default implementation: linear search using iterator
        (0..self.child_count()).find(|&index| self.get_key(index) == key)
    }

    /// Returns the pass-through flags the host should honor for every child.
    fn behavior(&self) -> ChildBehavior {
        ChildBehavior::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountOnly(usize);

    impl ChildDelegate<(), usize> for CountOnly {
        fn child_count(&self) -> usize {
            self.0
        }

        fn build(&self, _cx: &mut (), index: usize) -> Option<usize> {
            (index < self.0).then_some(index)
        }
    }

    #[test]
    fn test_user_keys_dont_collide_with_index_keys() {
        assert_ne!(ChildKey::User(0), ChildKey::Index(0));
        assert_ne!(ChildKey::User(3), ChildKey::Index(3));
        assert!(ChildKey::User(0).is_user_key());
        assert!(ChildKey::Index(0).is_index_key());
    }

    #[test]
    fn test_behavior_defaults_enabled() {
        let behavior = ChildBehavior::default();
        assert!(behavior.automatic_keep_alives);
        assert!(behavior.repaint_boundaries);
        assert!(behavior.semantic_indexes);
    }

    #[test]
    fn test_behavior_setters() {
        let behavior = ChildBehavior::new()
            .automatic_keep_alives(false)
            .semantic_indexes(false);
        assert!(!behavior.automatic_keep_alives);
        assert!(behavior.repaint_boundaries);
        assert!(!behavior.semantic_indexes);
    }

    #[test]
    fn test_default_keys_and_lookup() {
        let delegate = CountOnly(5);
        assert_eq!(delegate.get_key(3), ChildKey::Index(3));
        assert_eq!(delegate.get_index(ChildKey::Index(3)), Some(3));
        assert_eq!(delegate.get_index(ChildKey::Index(5)), None);
        assert_eq!(delegate.get_index(ChildKey::User(3)), None);
    }

    #[test]
    fn test_default_semantic_index_is_identity() {
        let delegate = CountOnly(2);
        assert_eq!(delegate.get_semantic_index(0), Some(0));
        assert_eq!(delegate.get_semantic_index(1), Some(1));
    }
}
