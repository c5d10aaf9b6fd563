//! # Cache Trait Hierarchy
//!
//! This module defines the trait hierarchy for the cache policies, providing a
//! unified interface over interchangeable eviction strategies (unbounded,
//! FIFO, LIFO, LRU, MRU, LFU) so callers can swap policies without touching
//! call sites.
//!
//! ## Architecture
//!
//! ```text
//!                ┌───────────────────────────────────────┐
//!                │             Cache<K, V>               │
//!                │                                       │
//!                │  put(&mut, K, V) → Option<V>          │
//!                │  get(&mut, &K) → Option<&V>           │
//!                │  contains(&, &K) → bool               │
//!                │  len(&) → usize                       │
//!                │  is_empty(&) → bool                   │
//!                │  capacity(&) → Option<usize>          │
//!                │  clear(&mut)                          │
//!                └──────────────────┬────────────────────┘
//!                                   │
//!                                   ▼
//!                ┌───────────────────────────────────────┐
//!                │          MutableCache<K, V>           │
//!                │                                       │
//!                │  remove(&K) → Option<V>               │
//!                │  remove_batch(&[K]) → Vec<Option<V>>  │
//!                └───────────────────────────────────────┘
//! ```
//!
//! ## Trait Design
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │   1. Cache: universal operations ALL policies must support           │
//!   │      └── put, get, contains, len, capacity, clear                    │
//!   │                                                                      │
//!   │   2. MutableCache: adds arbitrary key-based removal                  │
//!   │      └── remove(&K) / remove_batch(&[K])                             │
//!   │                                                                      │
//!   │   Every policy in this crate keys its book-keeping by key (not by    │
//!   │   queue position), so arbitrary removal stays O(1) and all six       │
//!   │   policies implement both traits.                                    │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Policy Comparison
//!
//! | Policy    | Eviction basis   | Victim at capacity              |
//! |-----------|------------------|---------------------------------|
//! | Unbounded | never evicts     | -                               |
//! | FIFO      | insertion order  | oldest insertion                |
//! | LIFO      | insertion order  | most recent prior insertion     |
//! | LRU       | last access      | least recently used             |
//! | MRU       | last access      | most recently used              |
//! | LFU       | access frequency | least frequent, LRU tie-break   |
//!
//! ## Example Usage
//!
//! ```rust
//! use evicache::traits::{Cache, MutableCache};
//! use evicache::policy::lru::LruCache;
//!
//! // Function accepting any cache
//! fn warm_cache<C: Cache<u64, String>>(cache: &mut C, data: &[(u64, String)]) {
//!     for (key, value) in data {
//!         cache.put(*key, value.clone());
//!     }
//! }
//!
//! // Function requiring removal capability
//! fn invalidate_keys<C: MutableCache<u64, String>>(cache: &mut C, keys: &[u64]) {
//!     for key in keys {
//!         cache.remove(key);
//!     }
//! }
//!
//! let mut cache = LruCache::new(100).unwrap();
//! warm_cache(&mut cache, &[(1, "one".to_string()), (2, "two".to_string())]);
//! invalidate_keys(&mut cache, &[1]);
//! assert_eq!(cache.len(), 1);
//! ```
//!
//! ## Thread Safety
//!
//! - Policy implementations are **NOT thread-safe** by themselves.
//! - Wrap any of them in [`SyncCache`](crate::sync::SyncCache) for shared
//!   access from multiple threads.
//!
//! ## Implementation Notes
//!
//! - **Trait Bounds**: `Cache` has no bounds on K, V; implementations add
//!   `K: Eq + Hash + Clone` as needed.
//! - **Default Implementations**: `is_empty()`, `remove_batch()`.
//! - **Capacity**: `capacity()` returns `None` for unbounded caches, so a
//!   `len() ≤ capacity` check is written `capacity().map_or(true, |c| len() <= c)`.

/// Core cache operations that all policies support.
///
/// This trait defines the fundamental operations that make sense for any
/// cache, regardless of eviction policy.
///
/// # Type Parameters
///
/// - `K`: Key type (implementations typically require `Eq + Hash + Clone`)
/// - `V`: Value type
///
/// # Example
///
/// ```
/// use evicache::traits::Cache;
/// use evicache::policy::fifo::FifoCache;
///
/// fn warm_cache<C: Cache<u64, String>>(cache: &mut C, data: &[(u64, String)]) {
///     for (key, value) in data {
///         cache.put(*key, value.clone());
///     }
/// }
///
/// let mut cache = FifoCache::new(100).unwrap();
/// warm_cache(&mut cache, &[(1, "one".to_string()), (2, "two".to_string())]);
/// assert_eq!(cache.len(), 2);
/// ```
pub trait Cache<K, V> {
    /// Stores a key-value pair, returning the previous value if the key was
    /// already present.
    ///
    /// Overwriting an existing key never evicts. When a bounded cache is at
    /// capacity and the key is new, an entry is discarded according to the
    /// eviction policy; which side of the write the discard happens on
    /// (before the insert or after it) is part of each policy's contract.
    ///
    /// # Example
    ///
    /// ```
    /// use evicache::traits::Cache;
    /// use evicache::policy::lru::LruCache;
    ///
    /// let mut cache = LruCache::new(10).unwrap();
    ///
    /// // New key returns None
    /// assert_eq!(cache.put(1, "first"), None);
    ///
    /// // Existing key returns previous value
    /// assert_eq!(cache.put(1, "second"), Some("first"));
    /// ```
    fn put(&mut self, key: K, value: V) -> Option<V>;

    /// Gets a reference to a value by key.
    ///
    /// A hit may update internal state (recency, frequency) depending on the
    /// eviction policy. A miss returns `None` and changes nothing. Use
    /// [`contains`](Self::contains) to check existence without affecting
    /// eviction order.
    ///
    /// # Example
    ///
    /// ```
    /// use evicache::traits::Cache;
    /// use evicache::policy::lru::LruCache;
    ///
    /// let mut cache = LruCache::new(10).unwrap();
    /// cache.put(1, "value");
    ///
    /// assert_eq!(cache.get(&1), Some(&"value"));
    /// assert_eq!(cache.get(&99), None);
    /// ```
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Checks if a key exists without updating access state.
    ///
    /// Unlike [`get`](Self::get), this does not affect eviction order or
    /// frequency counts.
    ///
    /// # Example
    ///
    /// ```
    /// use evicache::traits::Cache;
    /// use evicache::policy::lfu::LfuCache;
    ///
    /// let mut cache = LfuCache::new(10).unwrap();
    /// cache.put(1, "value");
    ///
    /// assert!(cache.contains(&1));
    /// assert!(!cache.contains(&99));
    /// assert_eq!(cache.frequency(&1), Some(1)); // unchanged by contains
    /// ```
    fn contains(&self, key: &K) -> bool;

    /// Returns the current number of entries in the cache.
    ///
    /// # Example
    ///
    /// ```
    /// use evicache::traits::Cache;
    /// use evicache::policy::fifo::FifoCache;
    ///
    /// let mut cache = FifoCache::new(10).unwrap();
    /// assert_eq!(cache.len(), 0);
    ///
    /// cache.put(1, "one");
    /// cache.put(2, "two");
    /// assert_eq!(cache.len(), 2);
    /// ```
    fn len(&self) -> usize;

    /// Returns `true` if the cache contains no entries.
    ///
    /// # Example
    ///
    /// ```
    /// use evicache::traits::Cache;
    /// use evicache::policy::lifo::LifoCache;
    ///
    /// let mut cache: LifoCache<u64, &str> = LifoCache::new(10).unwrap();
    /// assert!(cache.is_empty());
    ///
    /// cache.put(1, "value");
    /// assert!(!cache.is_empty());
    /// ```
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum capacity, or `None` for unbounded caches.
    ///
    /// # Example
    ///
    /// ```
    /// use evicache::traits::Cache;
    /// use evicache::policy::lru::LruCache;
    /// use evicache::policy::unbounded::UnboundedCache;
    ///
    /// let bounded: LruCache<u64, &str> = LruCache::new(100).unwrap();
    /// assert_eq!(bounded.capacity(), Some(100));
    ///
    /// let unbounded: UnboundedCache<u64, &str> = UnboundedCache::new();
    /// assert_eq!(unbounded.capacity(), None);
    /// ```
    fn capacity(&self) -> Option<usize>;

    /// Removes all entries from the cache.
    ///
    /// Eviction book-keeping is reset along with the entries; nothing is
    /// reported as discarded.
    ///
    /// # Example
    ///
    /// ```
    /// use evicache::traits::Cache;
    /// use evicache::policy::fifo::FifoCache;
    ///
    /// let mut cache = FifoCache::new(10).unwrap();
    /// cache.put(1, "one");
    /// cache.put(2, "two");
    /// assert_eq!(cache.len(), 2);
    ///
    /// cache.clear();
    /// assert!(cache.is_empty());
    /// ```
    fn clear(&mut self);
}

/// Caches that support arbitrary key-based removal.
///
/// This trait extends [`Cache`] with the ability to remove entries by key.
/// All policies in this crate implement it: their book-keeping is keyed, so
/// removing an arbitrary entry never leaves a stale queue slot behind.
///
/// # Example
///
/// ```
/// use evicache::traits::{Cache, MutableCache};
/// use evicache::policy::lru::LruCache;
///
/// fn invalidate_keys<C: MutableCache<u64, String>>(cache: &mut C, keys: &[u64]) {
///     for key in keys {
///         cache.remove(key);
///     }
/// }
///
/// let mut cache = LruCache::new(100).unwrap();
/// cache.put(1, "one".to_string());
/// cache.put(2, "two".to_string());
/// cache.put(3, "three".to_string());
///
/// invalidate_keys(&mut cache, &[1, 3]);
/// assert!(!cache.contains(&1));
/// assert!(cache.contains(&2));
/// assert!(!cache.contains(&3));
/// ```
pub trait MutableCache<K, V>: Cache<K, V> {
    /// Removes a specific key-value pair.
    ///
    /// Returns the removed value if the key existed, or `None` if it didn't.
    /// A caller remove is not an eviction: it is never reported to the
    /// discard sink.
    ///
    /// # Example
    ///
    /// ```
    /// use evicache::traits::{Cache, MutableCache};
    /// use evicache::policy::lfu::LfuCache;
    ///
    /// let mut cache = LfuCache::new(10).unwrap();
    /// cache.put(1, "value");
    ///
    /// assert_eq!(cache.remove(&1), Some("value"));
    /// assert_eq!(cache.remove(&1), None); // Already removed
    /// ```
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Removes multiple keys.
    ///
    /// Returns a vector of `Option<V>` in the same order as the input keys.
    /// The default implementation loops over [`remove`](Self::remove).
    ///
    /// # Example
    ///
    /// ```
    /// use evicache::traits::{Cache, MutableCache};
    /// use evicache::policy::lru::LruCache;
    ///
    /// let mut cache = LruCache::new(10).unwrap();
    /// cache.put(1, "one");
    /// cache.put(2, "two");
    /// cache.put(3, "three");
    ///
    /// let removed = cache.remove_batch(&[1, 99, 3]);
    /// assert_eq!(removed, vec![Some("one"), None, Some("three")]);
    /// assert_eq!(cache.len(), 1);
    /// ```
    fn remove_batch(&mut self, keys: &[K]) -> Vec<Option<V>> {
        keys.iter().map(|k| self.remove(k)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Mock implementation for testing trait design
    struct MockCache {
        data: Vec<(i32, String)>,
    }

    impl Cache<i32, String> for MockCache {
        fn put(&mut self, key: i32, value: String) -> Option<String> {
            if let Some((_, existing)) = self.data.iter_mut().find(|(k, _)| *k == key) {
                return Some(std::mem::replace(existing, value));
            }
            self.data.push((key, value));
            None
        }

        fn get(&mut self, key: &i32) -> Option<&String> {
            self.data.iter().find(|(k, _)| k == key).map(|(_, v)| v)
        }

        fn contains(&self, key: &i32) -> bool {
            self.data.iter().any(|(k, _)| k == key)
        }

        fn len(&self) -> usize {
            self.data.len()
        }

        fn capacity(&self) -> Option<usize> {
            None
        }

        fn clear(&mut self) {
            self.data.clear();
        }
    }

    impl MutableCache<i32, String> for MockCache {
        fn remove(&mut self, key: &i32) -> Option<String> {
            let pos = self.data.iter().position(|(k, _)| k == key)?;
            Some(self.data.remove(pos).1)
        }
    }

    #[test]
    fn test_cache_trait_design() {
        let mut cache = MockCache { data: Vec::new() };

        cache.put(1, "first".to_string());
        cache.put(2, "second".to_string());
        assert_eq!(cache.len(), 2);
        assert!(cache.contains(&1));
        assert!(!cache.is_empty());
        assert_eq!(cache.capacity(), None);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_put_returns_previous_value() {
        let mut cache = MockCache { data: Vec::new() };

        assert_eq!(cache.put(1, "first".to_string()), None);
        assert_eq!(
            cache.put(1, "second".to_string()),
            Some("first".to_string())
        );
        assert_eq!(cache.get(&1), Some(&"second".to_string()));
    }

    #[test]
    fn test_remove_batch_default_impl() {
        let mut cache = MockCache { data: Vec::new() };
        cache.put(1, "one".to_string());
        cache.put(2, "two".to_string());
        cache.put(3, "three".to_string());

        let removed = cache.remove_batch(&[1, 99, 3]);
        assert_eq!(
            removed,
            vec![Some("one".to_string()), None, Some("three".to_string())]
        );
        assert_eq!(cache.len(), 1);
        assert!(cache.contains(&2));
    }

    #[test]
    fn test_generic_functions_over_traits() {
        fn fill<C: Cache<i32, String>>(cache: &mut C, count: i32) {
            for i in 0..count {
                cache.put(i, i.to_string());
            }
        }

        fn drop_evens<C: MutableCache<i32, String>>(cache: &mut C, max: i32) {
            for i in (0..max).step_by(2) {
                cache.remove(&i);
            }
        }

        let mut cache = MockCache { data: Vec::new() };
        fill(&mut cache, 6);
        drop_evens(&mut cache, 6);

        assert_eq!(cache.len(), 3);
        assert!(cache.contains(&1));
        assert!(!cache.contains(&2));
    }
}
