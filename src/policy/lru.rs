//! LRU (Least Recently Used) cache replacement policy.
//!
//! Implements a recency-based eviction algorithm where the entry that has
//! gone unused longest is evicted first when the cache is full. Recency is
//! tracked with a keyed order list: every hit and every write moves the key
//! to the most-recent end.
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
//!   │ EVICT           keep                   │
//!   └────────────────────────────────────────┘
//!
//! Insert Flow (new key)
//! ──────────────────────
//!
//!   put("new_key", value):
//!     1. If at capacity: pop front (least recent), evict, notify sink
//!     2. Append key at the back of the order list
//!     3. Write (key, value) into the store
//!
//! Access Flow (existing key)
//! ──────────────────────────
//!
//!   get("existing_key") / put("existing_key", v):
//!     1. Move key to the back of the order list
//!     2. Read or overwrite the value
//! ```
//!
//! ## Operations
//!
//! | Operation   | Time   | Notes                                      |
//! |-------------|--------|--------------------------------------------|
//! | `get`       | O(1)   | Lookup + move to most-recent position      |
//! | `put`       | O(1)   | May evict the least recent entry first     |
//! | `contains`  | O(1)   | HashMap lookup, no reordering              |
//! | `remove`    | O(1)   | Keyed order list, no stale slots           |
//!
//! ## Example Usage
//!
//! ```
//! use evicache::policy::lru::LruCache;
//!
//! let mut cache = LruCache::new(2).unwrap();
//! cache.put("a", 1);
//! cache.put("b", 2);
//!
//! cache.get(&"a"); // "a" is now the most recent
//! cache.put("c", 3); // discards "b", the least recent
//!
//! assert!(cache.contains(&"a"));
//! assert!(!cache.contains(&"b"));
//! assert!(cache.contains(&"c"));
//! ```
//!
//! ## When to Use
//!
//! **Use LRU when:**
//! - The workload shows temporal locality
//! - A general-purpose default is needed
//!
//! **Avoid LRU when:**
//! - Large scans flush the working set (consider LFU)
//! - Access tracking overhead matters (use FIFO)

use crate::ds::OrderList;
use crate::error::ConfigError;
use crate::notify::{DiscardSink, LogDiscardSink};
use crate::store::{HashMapStore, StoreMetrics};
use crate::traits::{Cache, MutableCache};
use std::fmt::{self, Display};
use std::hash::Hash;

/// LRU (Least Recently Used) cache.
///
/// Evicts the entry that has gone unused longest. Both `get` hits and writes
/// count as uses.
///
/// # Type Parameters
///
/// - `K`: Key type, must be `Clone + Eq + Hash`
/// - `V`: Value type
/// - `S`: Discard sink, defaults to [`LogDiscardSink`]
///
/// # Example
///
/// ```
/// use evicache::policy::lru::LruCache;
///
/// let mut cache = LruCache::new(100).unwrap();
/// cache.put("key1", "value1");
///
/// // A hit refreshes recency
/// assert_eq!(cache.get(&"key1"), Some(&"value1"));
/// ```
pub struct LruCache<K, V, S = LogDiscardSink>
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

impl<K, V> LruCache<K, V>
where
    K: Clone + Eq + Hash + Display,
{
    /// Creates an LRU cache that logs discards via `tracing`.
    ///
    /// Returns an error when `capacity` is zero. The default sink formats
    /// keys, so `K: Display` is required here; use
    /// [`with_sink`](Self::with_sink) for other key types.
    ///
    /// # Example
    ///
    /// ```
    /// use evicache::policy::lru::LruCache;
    ///
    /// let cache: LruCache<String, i32> = LruCache::new(100).unwrap();
    /// assert_eq!(cache.capacity(), Some(100));
    ///
    /// assert!(LruCache::<String, i32>::new(0).is_err());
    /// ```
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        Self::with_sink(capacity, LogDiscardSink)
    }
}

impl<K, V, S> LruCache<K, V, S>
where
    K: Clone + Eq + Hash,
    S: DiscardSink<K>,
{
    /// Creates an LRU cache that reports discards to `sink`.
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
    /// An overwrite refreshes the key's recency. A new key evicts the least
    /// recently used entry first if the cache is full, then lands at the
    /// most-recent position.
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
    /// A miss changes nothing beyond the miss counter.
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

    /// Returns the least recently used entry, the next in line for eviction.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        let key = self.order.front()?;
        let value = self.store.peek(key)?;
        Some((key, value))
    }

    /// Marks a key as most recently used without reading its value.
    ///
    /// Returns `true` if the key was present.
    #[inline]
    pub fn touch(&mut self, key: &K) -> bool {
        self.order.move_to_back(key)
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

    /// Evicts least recently used entries until there is room for one more.
    #[inline]
    fn evict_if_needed(&mut self) {
        while self.store.is_full() {
            if let Some(victim) = self.order.pop_front() {
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

impl<K, V, S> fmt::Debug for LruCache<K, V, S>
where
    K: Clone + Eq + Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity", &self.store.capacity())
            .field("len", &self.store.len())
            .finish_non_exhaustive()
    }
}

impl<K, V, S> Cache<K, V> for LruCache<K, V, S>
where
    K: Clone + Eq + Hash,
    S: DiscardSink<K>,
{
    #[inline]
    fn put(&mut self, key: K, value: V) -> Option<V> {
        LruCache::put(self, key, value)
    }

    #[inline]
    fn get(&mut self, key: &K) -> Option<&V> {
        LruCache::get(self, key)
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        LruCache::contains(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        LruCache::len(self)
    }

    #[inline]
    fn capacity(&self) -> Option<usize> {
        LruCache::capacity(self)
    }

    fn clear(&mut self) {
        LruCache::clear(self);
    }
}

impl<K, V, S> MutableCache<K, V> for LruCache<K, V, S>
where
    K: Clone + Eq + Hash,
    S: DiscardSink<K>,
{
    #[inline]
    fn remove(&mut self, key: &K) -> Option<V> {
        LruCache::remove(self, key)
    }
}
