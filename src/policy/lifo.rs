//! LIFO (Last In, First Out) cache replacement policy.
//!
//! Implements a stack-flavored eviction algorithm in which the write goes
//! through first and the entry inserted immediately *before* it is evicted
//! when capacity is exceeded. Early insertions are effectively pinned; the
//! churn happens at the newest end.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        LifoCache<K, V> Layout                           │
//! │                                                                         │
//! │   ┌─────────────────────────────────────────────────────────────────┐   │
//! │   │  store: HashMapStore<K, V>        last: Option<K>               │   │
//! │   │       key → value                   prior insertion             │   │
//! │   │                                                                 │   │
//! │   │  ┌──────────┬──────┐                ┌────────────┐              │   │
//! │   │  │   Key    │Value │                │ Some("p3") │              │   │
//! │   │  ├──────────┼──────┤                └────────────┘              │   │
//! │   │  │  "p1"    │  v1  │          the key written by the most      │   │
//! │   │  │  "p2"    │  v2  │          recent put; the next put's       │   │
//! │   │  │  "p3"    │  v3  │          victim if the cache overflows    │   │
//! │   │  └──────────┴──────┘                                            │   │
//! │   └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │   ┌─────────────────────────────────────────────────────────────────┐   │
//! │   │                    LIFO Eviction (Prior Key)                    │   │
//! │   │                                                                 │   │
//! │   │   • Every put writes through, then records itself as `last`     │   │
//! │   │   • Overflow evicts `last` from before the write, never the     │   │
//! │   │     key just written                                            │   │
//! │   │   • Opposite end of the queue from FIFO (which evicts oldest)   │   │
//! │   │                                                                 │   │
//! │   │   Example: capacity 2, put A, put B, put C                      │   │
//! │   │     put A → {A}         last = A                                │   │
//! │   │     put B → {A, B}      last = B                                │   │
//! │   │     put C → {A, B, C} overflows: evict B → {A, C}, last = C     │   │
//! │   └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//!
//! Insert Flow (every put)
//! ───────────────────────
//!
//!   put(key, value):
//!     1. Write (key, value) into the store
//!     2. If over capacity: evict `last` (skip silently if absent)
//!     3. last = key
//!
//! Access Flow (existing key)
//! ──────────────────────────
//!
//!   get(key):
//!     1. Lookup value in store
//!     2. Return &value (no pointer change!)
//! ```
//!
//! ## Operations
//!
//! | Operation   | Time   | Notes                                      |
//! |-------------|--------|--------------------------------------------|
//! | `get`       | O(1)   | HashMap lookup, no pointer change          |
//! | `put`       | O(1)   | Writes through, may evict the prior key    |
//! | `contains`  | O(1)   | HashMap lookup only                        |
//! | `remove`    | O(1)   | Clears the pointer when it matches         |
//!
//! ## Algorithm Properties
//!
//! - **Write-Through**: The new entry always lands; overflow is resolved by
//!   evicting the previously inserted key
//! - **Pointer Updated Every Put**: Overwrites retarget the pointer too, so
//!   the victim is always the key of the immediately preceding put
//! - **No Access Tracking**: Zero overhead for access patterns
//! - **Early Entries Pinned**: The first `capacity - 1` distinct keys tend
//!   to stay resident
//!
//! ## Use Cases
//!
//! - Scratch space where the newest items are the most disposable
//! - Workloads whose earliest entries form the long-lived working set
//!
//! ## Example Usage
//!
//! ```
//! use evicache::policy::lifo::LifoCache;
//!
//! let mut cache = LifoCache::new(2).unwrap();
//!
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.put("c", 3); // discards "b", the insertion before "c"
//!
//! assert!(cache.contains(&"a"));
//! assert!(!cache.contains(&"b"));
//! assert!(cache.contains(&"c"));
//! ```
//!
//! ## Thread Safety
//!
//! - Not thread-safe; wrap in [`SyncCache`](crate::sync::SyncCache) for
//!   concurrent access.
//!
//! ## When to Use
//!
//! **Use LIFO when:**
//! - Newest insertions are least likely to be reused
//! - The early working set must never be displaced
//!
//! **Avoid LIFO when:**
//! - Temporal locality exists (use LRU instead)
//! - Frequency matters (use LFU instead)
//! - Predictable aging is needed (FIFO is more intuitive)
//!
//! ## References
//!
//! - Wikipedia: Cache replacement policies

use crate::error::ConfigError;
use crate::notify::{DiscardSink, LogDiscardSink};
use crate::store::{HashMapStore, StoreMetrics};
use crate::traits::{Cache, MutableCache};
use std::fmt::{self, Display};
use std::hash::Hash;

/// LIFO (Last In, First Out) cache.
///
/// Every put writes through and records its key; when the write pushes the
/// cache past capacity, the key recorded by the *previous* put is evicted.
/// The entry just written always survives.
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
/// use evicache::policy::lifo::LifoCache;
///
/// let mut cache = LifoCache::new(100).unwrap();
///
/// cache.put("key1", "value1");
/// assert!(cache.contains(&"key1"));
///
/// // Get doesn't affect eviction (unlike LRU)
/// cache.get(&"key1");
///
/// // Update existing key
/// cache.put("key1", "new_value");
/// assert_eq!(cache.get(&"key1"), Some(&"new_value"));
/// ```
///
/// # Eviction Behavior
///
/// When a put overflows the capacity, the victim is the key written by the
/// put immediately before it. If that key is no longer present, nothing is
/// evicted.
pub struct LifoCache<K, V, S = LogDiscardSink>
where
    K: Clone + Eq + Hash,
{
    /// Key/value storage with access metrics
    store: HashMapStore<K, V>,
    /// Key written by the most recent put
    last: Option<K>,
    /// Receives every evicted key
    sink: S,
}

impl<K, V> LifoCache<K, V>
where
    K: Clone + Eq + Hash + Display,
{
    /// Creates a LIFO cache that logs discards via `tracing`.
    ///
    /// Returns an error when `capacity` is zero. The default sink formats
    /// keys, so `K: Display` is required here; use
    /// [`with_sink`](Self::with_sink) for other key types.
    ///
    /// # Example
    ///
    /// ```
    /// use evicache::policy::lifo::LifoCache;
    ///
    /// let cache: LifoCache<String, i32> = LifoCache::new(100).unwrap();
    /// assert_eq!(cache.capacity(), Some(100));
    /// assert!(cache.is_empty());
    ///
    /// let err = LifoCache::<String, i32>::new(0).unwrap_err();
    /// assert!(err.message().contains("capacity"));
    /// ```
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        Self::with_sink(capacity, LogDiscardSink)
    }
}

impl<K, V, S> LifoCache<K, V, S>
where
    K: Clone + Eq + Hash,
    S: DiscardSink<K>,
{
    /// Creates a LIFO cache that reports discards to `sink`.
    ///
    /// Returns an error when `capacity` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use evicache::notify::RecordingSink;
    /// use evicache::policy::lifo::LifoCache;
    ///
    /// let sink = RecordingSink::new();
    /// let mut cache = LifoCache::with_sink(2, sink.clone()).unwrap();
    /// cache.put("a", 1);
    /// cache.put("b", 2);
    /// cache.put("c", 3);
    ///
    /// assert_eq!(sink.discards(), vec!["b"]);
    /// ```
    pub fn with_sink(capacity: usize, sink: S) -> Result<Self, ConfigError> {
        Ok(Self {
            store: HashMapStore::bounded(capacity)?,
            last: None,
            sink,
        })
    }

    /// Stores a key-value pair, returning the previous value for the key.
    ///
    /// The write always goes through. If it pushed the cache over capacity,
    /// the key recorded by the previous put is evicted; the pointer then
    /// moves to this key, whether the put inserted or overwrote.
    ///
    /// # Example
    ///
    /// ```
    /// use evicache::policy::lifo::LifoCache;
    ///
    /// let mut cache = LifoCache::new(100).unwrap();
    ///
    /// cache.put("key", "initial");
    /// assert_eq!(cache.len(), 1);
    ///
    /// assert_eq!(cache.put("key", "updated"), Some("initial"));
    /// assert_eq!(cache.len(), 1);
    /// ```
    #[inline]
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let previous = self.store.put(key.clone(), value);
        self.evict_if_needed();
        self.last = Some(key);
        previous
    }

    /// Retrieves a value by key without affecting the eviction pointer.
    ///
    /// The access is counted in the metrics.
    #[inline]
    pub fn get(&mut self, key: &K) -> Option<&V> {
        self.store.get(key)
    }

    /// Retrieves a value by key without touching metrics or pointer.
    #[inline]
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.store.peek(key)
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
    /// A caller remove is not an eviction: the sink is not notified. If the
    /// removed key was the recorded prior insertion, the pointer is cleared
    /// so the next overflow evicts nothing rather than a ghost.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let removed = self.store.remove(key);
        if removed.is_some() && self.last.as_ref() == Some(key) {
            self.last = None;
        }
        removed
    }

    /// Clears all entries and the eviction pointer.
    pub fn clear(&mut self) {
        self.store.clear();
        self.last = None;

        #[cfg(debug_assertions)]
        self.validate_invariants();
    }

    /// Iterates over entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.store.iter()
    }

    /// Snapshot of the access metrics.
    #[inline]
    pub fn metrics(&self) -> StoreMetrics {
        self.store.metrics()
    }

    /// Evicts the recorded prior key when the cache is over capacity.
    ///
    /// If the pointer is empty or the key has already left the cache, the
    /// overflow is left standing; the next put will shrink it.
    #[inline]
    fn evict_if_needed(&mut self) {
        if !self.store.over_capacity() {
            return;
        }
        if let Some(victim) = self.last.take() {
            if self.store.evict(&victim).is_some() {
                self.sink.on_discard(&victim);
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
        if let Some(last) = &self.last {
            debug_assert!(
                self.store.contains(last),
                "eviction pointer references a missing key"
            );
        }
    }
}

impl<K, V, S> fmt::Debug for LifoCache<K, V, S>
where
    K: Clone + Eq + Hash + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LifoCache")
            .field("capacity", &self.store.capacity())
            .field("len", &self.store.len())
            .field("last", &self.last)
            .finish_non_exhaustive()
    }
}

impl<K, V, S> Cache<K, V> for LifoCache<K, V, S>
where
    K: Clone + Eq + Hash,
    S: DiscardSink<K>,
{
    #[inline]
    fn put(&mut self, key: K, value: V) -> Option<V> {
        LifoCache::put(self, key, value)
    }

    #[inline]
    fn get(&mut self, key: &K) -> Option<&V> {
        LifoCache::get(self, key)
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        LifoCache::contains(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        LifoCache::len(self)
    }

    #[inline]
    fn capacity(&self) -> Option<usize> {
        LifoCache::capacity(self)
    }

    fn clear(&mut self) {
        LifoCache::clear(self);
    }
}

impl<K, V, S> MutableCache<K, V> for LifoCache<K, V, S>
where
    K: Clone + Eq + Hash,
    S: DiscardSink<K>,
{
    #[inline]
    fn remove(&mut self, key: &K) -> Option<V> {
        LifoCache::remove(self, key)
    }
}
