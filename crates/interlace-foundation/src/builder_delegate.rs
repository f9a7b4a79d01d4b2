//! The plain (non-separated) builder delegate.
//!
//! [`ChildBuilderDelegate`] is the delegate shape a host pipeline consumes
//! for ordinary lists: a child count plus one builder callback, with
//! optional key, content-type, semantic-index, and relocation callbacks
//! layered on top.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::child_delegate::{ChildBehavior, ChildDelegate, ChildKey};

static OUT_OF_RANGE_LOGGED: AtomicBool = AtomicBool::new(false);

/// A delegate that produces children on demand from a builder callback.
///
/// Configuration is immutable once the delegate is handed to the host: the
/// `with_*` setters consume `self` so a fully wired delegate is built in one
/// expression, then only read from.
///
/// # Example
///
/// ```rust,ignore
/// let delegate = ChildBuilderDelegate::new(rows.len(), move |cx, index| {
///     row_element(cx, &rows[index])
/// })
/// .with_keys(move |index| Some(row_ids[index]))
/// .with_behavior(ChildBehavior::new().repaint_boundaries(false));
/// ```
pub struct ChildBuilderDelegate<Cx, El> {
    child_count: usize,
    builder: Rc<dyn Fn(&mut Cx, usize) -> El>,
    /// Key generator. Returning `None` for an index falls back to the
    /// default index key.
    key: Option<Rc<dyn Fn(usize) -> Option<u64>>>,
    content_type: Option<Rc<dyn Fn(usize) -> Option<u64>>>,
    semantic_index: Option<Rc<dyn Fn(usize) -> Option<usize>>>,
    find_index: Option<Rc<dyn Fn(ChildKey) -> Option<usize>>>,
    behavior: ChildBehavior,
    /// Cached key→index mapping for O(1) relocation lookups. Built lazily on
    /// first lookup, invalidated when the key callback changes.
    key_cache: RefCell<Option<HashMap<ChildKey, usize>>>,
}

impl<Cx, El> ChildBuilderDelegate<Cx, El> {
    /// Threshold below which linear search is faster than building a
    /// HashMap cache.
    const CACHE_THRESHOLD: usize = 64;

    /// Creates a delegate over `child_count` children produced by `builder`.
    ///
    /// The builder must produce a valid element for every index in
    /// `0..child_count`; the delegate never calls it outside that range.
    pub fn new<F>(child_count: usize, builder: F) -> Self
    where
        F: Fn(&mut Cx, usize) -> El + 'static,
    {
        Self {
            child_count,
            builder: Rc::new(builder),
            key: None,
            content_type: None,
            semantic_index: None,
            find_index: None,
            behavior: ChildBehavior::default(),
            key_cache: RefCell::new(None),
        }
    }

    /// Sets the key callback.
    ///
    /// Return `Some(key)` to give a child a stable caller key, or `None` to
    /// keep the default index key for that child.
    pub fn with_keys<F>(mut self, key: F) -> Self
    where
        F: Fn(usize) -> Option<u64> + 'static,
    {
        self.invalidate_cache();
        self.key = Some(Rc::new(key));
        self
    }

    /// Sets the content-type callback used to pool recycled children.
    pub fn with_content_types<F>(mut self, content_type: F) -> Self
    where
        F: Fn(usize) -> Option<u64> + 'static,
    {
        self.content_type = Some(Rc::new(content_type));
        self
    }

    /// Sets the semantic-index callback.
    ///
    /// Children mapped to `None` are excluded from accessibility
    /// enumeration. Without a callback, every child is enumerated in build
    /// order.
    pub fn with_semantic_indexes<F>(mut self, semantic_index: F) -> Self
    where
        F: Fn(usize) -> Option<usize> + 'static,
    {
        self.semantic_index = Some(Rc::new(semantic_index));
        self
    }

    /// Sets a relocation callback that overrides the built-in key lookup.
    ///
    /// The callback is forwarded to the host unchanged; it reasons in this
    /// delegate's own index space.
    pub fn with_find_index<F>(mut self, find_index: F) -> Self
    where
        F: Fn(ChildKey) -> Option<usize> + 'static,
    {
        self.find_index = Some(Rc::new(find_index));
        self
    }

    /// Sets the pass-through behavior flags.
    pub fn with_behavior(mut self, behavior: ChildBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    /// Invalidates the key cache. Called when the key callback changes.
    fn invalidate_cache(&self) {
        *self.key_cache.borrow_mut() = None;
    }

    /// Builds the key→index cache for O(1) lookups.
    fn ensure_cache(&self) {
        let mut cache = self.key_cache.borrow_mut();
        if cache.is_some() {
            return; // Already built
        }

        let mut map = HashMap::with_capacity(self.child_count);
        for index in 0..self.child_count {
            map.insert(self.get_key(index), index);
        }
        *cache = Some(map);
    }
}

impl<Cx, El> ChildDelegate<Cx, El> for ChildBuilderDelegate<Cx, El> {
    fn child_count(&self) -> usize {
        self.child_count
    }

    fn build(&self, cx: &mut Cx, index: usize) -> Option<El> {
        if index >= self.child_count {
            // Host contract violation. Answer "no child" and flag it once
            // rather than warning on every frame.
            if !OUT_OF_RANGE_LOGGED.swap(true, Ordering::Relaxed) {
                log::warn!(
                    "ChildBuilderDelegate: build requested for index {} with only {} children",
                    index,
                    self.child_count
                );
            }
            return None;
        }
        Some((self.builder)(cx, index))
    }

    fn get_key(&self, index: usize) -> ChildKey {
        if let Some(key_fn) = &self.key {
            if let Some(key) = key_fn(index) {
                return ChildKey::User(key);
            }
        }
        ChildKey::Index(index)
    }

    fn get_content_type(&self, index: usize) -> Option<u64> {
        self.content_type.as_ref().and_then(|type_fn| type_fn(index))
    }

    fn get_semantic_index(&self, index: usize) -> Option<usize> {
        if !self.behavior.semantic_indexes {
            return None;
        }
        match &self.semantic_index {
            Some(map_fn) => map_fn(index),
            None => Some(index),
        }
    }

    fn get_index(&self, key: ChildKey) -> Option<usize> {
        if let Some(find_fn) = &self.find_index {
            return find_fn(key);
        }

        // For small lists, linear search is faster than building/using the
        // cache.
        if self.child_count <= Self::CACHE_THRESHOLD {
            return (0..self.child_count).find(|&index| self.get_key(index) == key);
        }

        self.ensure_cache();
        self.key_cache
            .borrow()
            .as_ref()
            .and_then(|cache| cache.get(&key).copied())
    }

    fn behavior(&self) -> ChildBehavior {
        self.behavior
    }
}

impl<Cx, El> fmt::Debug for ChildBuilderDelegate<Cx, El> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChildBuilderDelegate")
            .field("child_count", &self.child_count)
            .field("behavior", &self.behavior)
            .finish_non_exhaustive()
    }
}
