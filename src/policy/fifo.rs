//! FIFO (First In, First Out) cache replacement policy.
//!
//! Implements a queue-based eviction algorithm where the oldest inserted
//! entry is evicted first when capacity is exceeded. Access patterns are
//! ignored entirely.
//!
//! ## Architecture
//!
//! ```text
//!   order (OrderList<K>)
//!   ┌─────────────────────────────┐
//!   │ Front                 Back  │
//!   ├─────────────────────────────┤
//!   │ [p1] [p2] [p3] [p4]         │
//!   │  ↑                ↑         │
//!   │ oldest          newest      │
//!   │ EVICT           keep        │
//!   └─────────────────────────────┘
//!
//! Insert Flow (new key)
//! ──────────────────────
//!
//!   put("new_key", value):
//!     1. Write (key, value) into the store
//!     2. Append key at the back of the order list
//!     3. While over capacity: pop front (oldest), evict, notify sink
//!
//! Access Flow (existing key)
//! ──────────────────────────
//!
//!   get("existing_key"):
//!     1. Lookup value in store
//!     2. Return &value (no reordering!)
//! ```
//!
//! ## Operations
//!
//! | Operation   | Time   | Notes                                      |
//! |-------------|--------|--------------------------------------------|
//! | `get`       | O(1)   | HashMap lookup, no reordering              |
//! | `put`       | O(1)*  | *Amortized, may trigger eviction           |
//! | `contains`  | O(1)   | HashMap lookup only                        |
//! | `remove`    | O(1)   | Keyed order list, no stale slots           |
//!
//! ## Algorithm Properties
//!
//! - **Queue Order**: Oldest insertion at the front, evicted first
//! - **No Access Tracking**: `get` and overwrites never change position
//! - **Predictable**: Entry lifetime depends only on insertion order
//!
//! ## Example Usage
//!
//! ```
//! use evicache::policy::fifo::FifoCache;
//!
//! let mut cache = FifoCache::new(2).unwrap();
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.put("c", 3); // discards "a", the oldest insertion
//!
//! assert!(!cache.contains(&"a"));
//! assert!(cache.contains(&"b"));
//! assert!(cache.contains(&"c"));
//! ```
//!
//! ## When to Use
//!
//! **Use FIFO when:**
//! - Entry lifetime should be predictable and age-based
//! - Access tracking overhead is not worth paying
//!
//! **Avoid FIFO when:**
//! - Temporal locality exists (use LRU instead)
//! - Frequency matters (use LFU instead)

use crate::ds::OrderList;
use crate::error::ConfigError;
use crate::notify::{DiscardSink, LogDiscardSink};
use crate::store::{HashMapStore, StoreMetrics};
use crate::traits::{Cache, MutableCache};
use std::fmt::{self, Display};
use std::hash::Hash;

/// FIFO (First In, First Out) cache.
///
/// Evicts the oldest inserted entry when capacity is exceeded. Overwriting a
/// key keeps its original queue position.
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
/// use evicache::policy::fifo::FifoCache;
///
/// let mut cache = FifoCache::new(100).unwrap();
/// cache.put("key1", "value1");
/// assert!(cache.contains(&"key1"));
///
/// // Get doesn't affect eviction order
/// cache.get(&"key1");
///
/// // Update existing key keeps queue position
/// cache.put("key1", "new_value");
/// assert_eq!(cache.get(&"key1"), Some(&"new_value"));
/// ```
pub struct FifoCache<K, V, S = LogDiscardSink>
where
    K: Clone + Eq + Hash,
{
    /// Key/value storage with access metrics
    store: HashMapStore<K, V>,
    /// Keys in insertion order (front = oldest)
    order: OrderList<K>,
    /// Receives every evicted key
    sink: S,
}

impl<K, V> FifoCache<K, V>
where
    K: Clone + Eq + Hash + Display,
{
    /// Creates a FIFO cache that logs discards via `tracing`.
    ///
    /// Returns an error when `capacity` is zero. The default sink formats
    /// keys, so `K: Display` is required here; use
    /// [`with_sink`](Self::with_sink) for other key types.
    ///
    /// # Example
    ///
    /// ```
    /// use evicache::policy::fifo::FifoCache;
    ///
    /// let cache: FifoCache<String, i32> = FifoCache::new(100).unwrap();
    /// assert_eq!(cache.capacity(), Some(100));
    /// assert!(cache.is_empty());
    ///
    /// assert!(FifoCache::<String, i32>::new(0).is_err());
    /// ```
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        Self::with_sink(capacity, LogDiscardSink)
    }
}

impl<K, V, S> FifoCache<K, V, S>
where
    K: Clone + Eq + Hash,
    S: DiscardSink<K>,
{
    /// Creates a FIFO cache that reports discards to `sink`.
    ///
    /// Returns an error when `capacity` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use evicache::notify::RecordingSink;
    /// use evicache::policy::fifo::FifoCache;
    ///
    /// let sink = RecordingSink::new();
    /// let mut cache = FifoCache::with_sink(1, sink.clone()).unwrap();
    /// cache.put("a", 1);
    /// cache.put("b", 2);
    ///
    /// assert_eq!(sink.discards(), vec!["a"]);
    /// ```
    pub fn with_sink(capacity: usize, sink: S) -> Result<Self, ConfigError> {
        Ok(Self {
            store: HashMapStore::bounded(capacity)?,
            order: OrderList::with_capacity(capacity),
            sink,
        })
    }

    /// Stores a key-value pair, returning the previous value for the key.
    ///
    /// A new key is appended at the back of the queue; the write happens
    /// first, then the oldest entry is evicted if the cache grew past its
    /// capacity. Overwriting an existing key never touches the queue.
    #[inline]
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let previous = self.store.put(key.clone(), value);
        if previous.is_none() {
            self.order.push_back(key);
            self.evict_if_needed();
        }
        previous
    }

    /// Retrieves a value by key without affecting eviction order.
    ///
    /// The access is counted in the metrics.
    #[inline]
    pub fn get(&mut self, key: &K) -> Option<&V> {
        self.store.get(key)
    }

    /// Retrieves a value by key without touching metrics or order.
    #[inline]
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.store.peek(key)
    }

    /// Returns the oldest entry, the next in line for eviction.
    pub fn peek_oldest(&self) -> Option<(&K, &V)> {
        let key = self.order.front()?;
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

    /// Iterates over entries from oldest to newest insertion.
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

    /// Evicts from the front of the queue until the cache is back within
    /// capacity.
    #[inline]
    fn evict_if_needed(&mut self) {
        while self.store.over_capacity() {
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

impl<K, V, S> fmt::Debug for FifoCache<K, V, S>
where
    K: Clone + Eq + Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FifoCache")
            .field("capacity", &self.store.capacity())
            .field("len", &self.store.len())
            .finish_non_exhaustive()
    }
}

impl<K, V, S> Cache<K, V> for FifoCache<K, V, S>
where
    K: Clone + Eq + Hash,
    S: DiscardSink<K>,
{
    #[inline]
    fn put(&mut self, key: K, value: V) -> Option<V> {
        FifoCache::put(self, key, value)
    }

    #[inline]
    fn get(&mut self, key: &K) -> Option<&V> {
        FifoCache::get(self, key)
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        FifoCache::contains(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        FifoCache::len(self)
    }

    #[inline]
    fn capacity(&self) -> Option<usize> {
        FifoCache::capacity(self)
    }

    fn clear(&mut self) {
        FifoCache::clear(self);
    }
}

impl<K, V, S> MutableCache<K, V> for FifoCache<K, V, S>
where
    K: Clone + Eq + Hash,
    S: DiscardSink<K>,
{
    #[inline]
    fn remove(&mut self, key: &K) -> Option<V> {
        FifoCache::remove(self, key)
    }
}
