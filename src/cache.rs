use std::num::NonZeroUsize;

use indexmap::IndexMap;

use crate::options::Options;

/// Memoizes block parse results keyed by the exact block text.
///
/// Keys are compared byte for byte; no normalization is applied. One cache should be owned per
/// logical document so that unrelated documents never share entries.
///
/// By default the cache is unbounded, entries live until [`ParseCache::clear`] and keep their
/// first-insertion order. A bounded cache evicts the least recently used entry once it grows past
/// its capacity. Only writes ([`ParseCache::set`], [`ParseCache::get_or_try_insert_with`]) count
/// as a use; [`ParseCache::get`] never mutates the cache.
#[derive(Debug, Clone)]
pub struct ParseCache<V> {
    // Bounded caches keep recency order here: the front is the least recently used entry.
    entries: IndexMap<String, V>,
    capacity: Option<NonZeroUsize>,
}

impl<V> Default for ParseCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> ParseCache<V> {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
            capacity: None,
        }
    }

    /// A cache that keeps at most `capacity` entries.
    pub fn bounded(capacity: NonZeroUsize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity.get()),
            capacity: Some(capacity),
        }
    }

    pub fn from_options(opts: &Options) -> Self {
        match opts.cache_capacity {
            Some(capacity) => Self::bounded(capacity),
            None => Self::new(),
        }
    }

    pub fn capacity(&self) -> Option<NonZeroUsize> {
        self.capacity
    }

    /// Look up a previously stored result. `None` is a miss.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    /// Store `value` under `key`, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: V) {
        let (index, _) = self.entries.insert_full(key.into(), value);
        self.touch(index);
        self.evict_over_capacity();
    }

    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return the cached value for `key`, computing and storing it with `f` on a miss.
    ///
    /// The boolean is `true` on a cache hit; in a bounded cache a hit also refreshes recency.
    /// When `f` fails nothing is stored and the error is returned.
    pub fn get_or_try_insert_with<E>(
        &mut self,
        key: &str,
        f: impl FnOnce() -> Result<V, E>,
    ) -> Result<(&V, bool), E> {
        if let Some(index) = self.entries.get_index_of(key) {
            let index = self.touch(index);
            return Ok((&self.entries[index], true));
        }

        let value = f()?;
        self.entries.insert(key.to_string(), value);
        self.evict_over_capacity();
        // Eviction only removes from the front, so the new entry is still last.
        let last = self.entries.len() - 1;
        Ok((&self.entries[last], false))
    }

    /// Keys from least to most recently used. Unbounded caches keep first-insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    // Recency only drives eviction, so unbounded caches skip the O(n) reorder.
    fn touch(&mut self, index: usize) -> usize {
        if self.capacity.is_none() {
            return index;
        }
        let last = self.entries.len() - 1;
        self.entries.move_index(index, last);
        last
    }

    fn evict_over_capacity(&mut self) {
        let Some(capacity) = self.capacity else {
            return;
        };
        while self.entries.len() > capacity.get() {
            if let Some((key, _)) = self.entries.shift_remove_index(0) {
                log::trace!("parse cache evicted {} byte block", key.len());
            }
        }
    }
}
