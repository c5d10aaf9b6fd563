//! MRU (Most Recently Used) cache replacement policy.
//!
//! Evicts the **most** recently used entry when capacity is reached. This is
//! the opposite of LRU and suits cyclic access patterns where the item just
//! touched is the least likely to be needed again soon.
//!
//! ## Architecture
//!
//! ```text
//!   order (OrderList<K>)
//!   ┌────────────────────────────────────────┐
//!   │ Front                           Back   │
//!   ├────────────────────────────────────────┤
//!   │ [p1] [p2] [p3] [p4]                    │
//!   │  ↑                ↑                    │
//!   │ least recent    most recent            │
//!   │ keep            EVICT                  │
//!   └────────────────────────────────────────┘
//! ```
//!
//! Same recency list as LRU, opposite end for eviction: a full cache pops the
//! back (most recent) to make room, so long-held entries survive.
//!
//! ## Operations
//!
//! | Operation   | Time   | Notes                                      |
//! |-------------|--------|--------------------------------------------|
//! | `get`       | O(1)   | Lookup + move to most-recent position      |
//! | `put`       | O(1)   | May evict the most recent entry first      |
//! | `contains`  | O(1)   | HashMap lookup, no reordering              |
//!
//! ## Example Usage
//!
//! ```
//! use evicache::policy::mru::MruCache;
//!
//! let mut cache = MruCache::new(2).unwrap();
//! cache.put("a", 1);
//! cache.put("b", 2);
//!
//! // "b" is the most recent, so it is the victim
//! cache.put("c", 3);
//!
//! assert!(cache.contains(&"a"));
//! assert!(!cache.contains(&"b"));
//! assert!(cache.contains(&"c"));
//! ```
//!
//! ## When to Use
//!
//! **Use MRU when:**
//! - Access patterns are cyclic and predictable
//! - The item just used will not be needed again soon
//!
//! **Avoid MRU when:**
//! - General-purpose caching is the goal (use LRU)
//! - The workload shows normal temporal locality

use crate::ds::OrderList;
use crate::error::ConfigError;
use crate::notify::{DiscardSink, LogDiscardSink};
use crate::store::{HashMapStore, StoreMetrics};
use crate::traits::{Cache, MutableCache};
use std::fmt::{self, Display};
use std::hash::Hash;

/// MRU (Most Recently Used) cache.
///
/// Evicts the entry used most recently. Both `get` hits and writes count as
/// uses, so the victim is whichever key was touched last.
pub struct MruCache<K, V, S = LogDiscardSink>
where
    K: Clone + Eq + Hash,
{
    /// Key/value storage with access metrics
    store: HashMapStore<K, V>,
    /// Keys from least to most recently used
    order: OrderList<K>,
    /// Receives every evicted key
    sink: S,
}

impl<K, V> MruCache<K, V>
where
    K: Clone + Eq + Hash + Display,
{
    /// Creates an MRU cache that logs discards via `tracing`.
    ///
    /// Returns an error when `capacity` is zero. The default sink formats
    /// keys, so `K: Display` is required here; use
    /// [`with_sink`](Self::with_sink) for other key types.
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        Self::with_sink(capacity, LogDiscardSink)
    }
}

impl<K, V, S> MruCache<K, V, S>
where
    K: Clone + Eq + Hash,
    S: DiscardSink<K>,
{
    /// Creates an MRU cache that reports discards to `sink`.
    ///
    /// Returns an error when `capacity` is zero.
    pub fn with_sink(capacity: usize, sink: S) -> Result<Self, ConfigError> {
        Ok(Self {
            store: HashMapStore::bounded(capacity)?,
            order: OrderList::with_capacity(capacity),
            sink,
        })
    }

    /// Stores a key-value pair, returning the previous value for the key.
    ///
    /// An overwrite refreshes the key's recency. A new key evicts the most
    /// recently used entry first if the cache is full.
    #[inline]
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if self.store.contains(&key) {
            self.order.move_to_back(&key);
            return self.store.put(key, value);
        }

        self.evict_if_needed();
        self.order.push_back(key.clone());
        self.store.put(key, value)
    }

    /// Retrieves a value by key; a hit refreshes the key's recency.
    ///
    /// After a hit the key sits at the most-recent position, which under MRU
    /// makes it the next victim.
    #[inline]
    pub fn get(&mut self, key: &K) -> Option<&V> {
        self.order.move_to_back(key);
        self.store.get(key)
    }

    /// Retrieves a value by key without touching metrics or recency.
    #[inline]
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.store.peek(key)
    }

    /// Returns the most recently used entry, the next in line for eviction.
    pub fn peek_mru(&self) -> Option<(&K, &V)> {
        let key = self.order.back()?;
        let value = self.store.peek(key)?;
        Some((key, value))
    }

    /// Returns `true` if the key exists in the cache.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.store.contains(key)
    }

    /// Returns the number of entries in the cache.
    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if the cache is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns the maximum capacity.
    #[inline]
    pub fn capacity(&self) -> Option<usize> {
        self.store.capacity()
    }

    /// Returns `true` once the cache holds `capacity` entries.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.store.is_full()
    }

    /// Removes a key, returning its value.
    ///
    /// A caller remove is not an eviction: the sink is not notified.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let removed = self.store.remove(key);
        if removed.is_some() {
            self.order.remove(key);
        }
        removed
    }

    /// Clears all entries from the cache.
    pub fn clear(&mut self) {
        self.store.clear();
        self.order.clear();

        #[cfg(debug_assertions)]
        self.validate_invariants();
    }

    /// Iterates over entries from least to most recently used.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.order
            .iter()
            .filter_map(|key| self.store.peek(key).map(|value| (key, value)))
    }

    /// Snapshot of the access metrics.
    #[inline]
    pub fn metrics(&self) -> StoreMetrics {
        self.store.metrics()
    }

    /// Evicts most recently used entries until there is room for one more.
    #[inline]
    fn evict_if_needed(&mut self) {
        while self.store.is_full() {
            if let Some(victim) = self.order.pop_back() {
                if self.store.evict(&victim).is_some() {
                    self.sink.on_discard(&victim);
                }
            } else {
                break;
            }
        }

        #[cfg(debug_assertions)]
        self.validate_invariants();
    }

    /// Validates internal data structure invariants.
    ///
    /// Only runs when debug assertions are enabled.
    #[cfg(debug_assertions)]
    fn validate_invariants(&self) {
        debug_assert_eq!(
            self.store.len(),
            self.order.len(),
            "store and order list have different sizes"
        );
        debug_assert!(
            self.store.capacity().map_or(true, |cap| self.store.len() <= cap),
            "cache exceeds its capacity"
        );
        for key in self.order.iter() {
            debug_assert!(self.store.contains(key), "ordered key missing from store");
        }
        self.order.debug_validate_invariants();
    }
}

impl<K, V, S> fmt::Debug for MruCache<K, V, S>
where
    K: Clone + Eq + Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MruCache")
            .field("capacity", &self.store.capacity())
            .field("len", &self.store.len())
            .finish_non_exhaustive()
    }
}

impl<K, V, S> Cache<K, V> for MruCache<K, V, S>
where
    K: Clone + Eq + Hash,
    S: DiscardSink<K>,
{
    #[inline]
    fn put(&mut self, key: K, value: V) -> Option<V> {
        MruCache::put(self, key, value)
    }

    #[inline]
    fn get(&mut self, key: &K) -> Option<&V> {
        MruCache::get(self, key)
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        MruCache::contains(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        MruCache::len(self)
    }

    #[inline]
    fn capacity(&self) -> Option<usize> {
        MruCache::capacity(self)
    }

    fn clear(&mut self) {
        MruCache::clear(self);
    }
}

impl<K, V, S> MutableCache<K, V> for MruCache<K, V, S>
where
    K: Clone + Eq + Hash,
    S: DiscardSink<K>,
{
    #[inline]
    fn remove(&mut self, key: &K) -> Option<V> {
        MruCache::remove(self, key)
    }
}
