//! Unbounded passthrough cache with no eviction.
//!
//! Stores every entry it is given and never discards anything. This is the
//! degenerate policy: a baseline for measuring what eviction costs, and a
//! drop-in when the working set is known to fit in memory.
//!
//! ## Operations
//!
//! | Operation   | Time   | Notes                                      |
//! |-------------|--------|--------------------------------------------|
//! | `get`       | O(1)   | HashMap lookup, counts hit/miss            |
//! | `put`       | O(1)*  | *Amortized, never evicts                   |
//! | `contains`  | O(1)   | HashMap lookup only                        |
//! | `remove`    | O(1)   | HashMap removal                            |
//!
//! ## Example Usage
//!
//! ```
//! use evicache::policy::unbounded::UnboundedCache;
//!
//! let mut cache = UnboundedCache::new();
//! for i in 0..10_000 {
//!     cache.put(i, i * 10);
//! }
//!
//! // Nothing was discarded.
//! assert_eq!(cache.len(), 10_000);
//! assert_eq!(cache.capacity(), None);
//! ```

use std::fmt;
use std::hash::Hash;

use crate::store::{HashMapStore, StoreMetrics};
use crate::traits::{Cache, MutableCache};

/// Cache with no capacity limit and no eviction.
///
/// # Example
///
/// ```
/// use evicache::policy::unbounded::UnboundedCache;
///
/// let mut cache = UnboundedCache::new();
/// cache.put("key", 42);
/// assert_eq!(cache.get(&"key"), Some(&42));
/// ```
pub struct UnboundedCache<K, V>
where
    K: Eq + Hash,
{
    /// Key/value storage with access metrics
    store: HashMapStore<K, V>,
}

impl<K, V> UnboundedCache<K, V>
where
    K: Eq + Hash,
{
    /// Creates an empty cache. Never fails: there is no capacity to reject.
    #[inline]
    pub fn new() -> Self {
        Self {
            store: HashMapStore::unbounded(),
        }
    }

    /// Stores a key-value pair, returning the previous value for the key.
    #[inline]
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        self.store.put(key, value)
    }

    /// Retrieves a value by key, counting the access in the metrics.
    #[inline]
    pub fn get(&mut self, key: &K) -> Option<&V> {
        self.store.get(key)
    }

    /// Retrieves a value by key without touching the metrics.
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

    /// Always `None`: this cache has no capacity limit.
    #[inline]
    pub fn capacity(&self) -> Option<usize> {
        None
    }

    /// Removes a key, returning its value.
    #[inline]
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.store.remove(key)
    }

    /// Clears all entries from the cache.
    pub fn clear(&mut self) {
        self.store.clear();
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
}

impl<K, V> Default for UnboundedCache<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for UnboundedCache<K, V>
where
    K: Eq + Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnboundedCache")
            .field("len", &self.store.len())
            .finish_non_exhaustive()
    }
}

impl<K, V> Cache<K, V> for UnboundedCache<K, V>
where
    K: Eq + Hash,
{
    #[inline]
    fn put(&mut self, key: K, value: V) -> Option<V> {
        UnboundedCache::put(self, key, value)
    }

    #[inline]
    fn get(&mut self, key: &K) -> Option<&V> {
        UnboundedCache::get(self, key)
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        UnboundedCache::contains(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        UnboundedCache::len(self)
    }

    #[inline]
    fn capacity(&self) -> Option<usize> {
        None
    }

    fn clear(&mut self) {
        UnboundedCache::clear(self);
    }
}

impl<K, V> MutableCache<K, V> for UnboundedCache<K, V>
where
    K: Eq + Hash,
{
    #[inline]
    fn remove(&mut self, key: &K) -> Option<V> {
        UnboundedCache::remove(self, key)
    }
}
