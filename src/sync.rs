//! Thread-safe cache wrapper.
//!
//! The policy caches are single-threaded: hits mutate eviction state, so
//! even reads need exclusive access. [`SyncCache`] wraps any policy in an
//! `Arc<parking_lot::Mutex<_>>` and hands out cloneable handles. Every
//! operation takes the one lock for its full duration, so each `put`/`get`
//! is atomic from an external observer's perspective.
//!
//! There is no shared read path. If read-mostly scaling matters, shard the
//! keyspace across several `SyncCache` instances instead.
//!
//! # Example
//!
//! ```
//! use evicache::policy::lru::LruCache;
//! use evicache::sync::SyncCache;
//! use std::thread;
//!
//! let cache = SyncCache::new(LruCache::new(100).unwrap());
//!
//! let writer = cache.clone();
//! let handle = thread::spawn(move || {
//!     writer.put("from_thread", 1);
//! });
//! handle.join().unwrap();
//!
//! assert_eq!(cache.get(&"from_thread"), Some(1));
//! ```

use crate::traits::{Cache, MutableCache};
use parking_lot::Mutex;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Shared handle to a mutex-protected policy cache.
///
/// Cloning the handle shares the underlying cache; dropping the last handle
/// drops the cache.
pub struct SyncCache<K, V, C> {
    inner: Arc<Mutex<C>>,
    _marker: PhantomData<(K, V)>,
}

impl<K, V, C> Clone for SyncCache<K, V, C> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _marker: PhantomData,
        }
    }
}

impl<K, V, C> fmt::Debug for SyncCache<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncCache").finish_non_exhaustive()
    }
}

impl<K, V, C> SyncCache<K, V, C>
where
    C: Cache<K, V>,
{
    /// Wraps a policy cache for shared use.
    pub fn new(cache: C) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
            _marker: PhantomData,
        }
    }

    /// Stores a key-value pair, returning the previous value for the key.
    pub fn put(&self, key: K, value: V) -> Option<V> {
        self.inner.lock().put(key, value)
    }

    /// Retrieves a cloned value by key.
    ///
    /// The hit updates the policy's eviction state under the lock. For
    /// values that are expensive to clone, use [`get_with`](Self::get_with).
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.inner.lock().get(key).cloned()
    }

    /// Retrieves a value by key and applies `f` to it under the lock.
    ///
    /// Works with non-cloneable values; the reference never escapes the
    /// critical section.
    ///
    /// # Example
    ///
    /// ```
    /// use evicache::policy::lru::LruCache;
    /// use evicache::sync::SyncCache;
    ///
    /// let cache = SyncCache::new(LruCache::new(10).unwrap());
    /// cache.put("key", vec![1, 2, 3]);
    ///
    /// // Read the length without cloning the vector out
    /// assert_eq!(cache.get_with(&"key", |v| v.len()), Some(3));
    /// ```
    pub fn get_with<F, R>(&self, key: &K, f: F) -> Option<R>
    where
        F: FnOnce(&V) -> R,
    {
        self.inner.lock().get(key).map(f)
    }

    /// Returns `true` if the key exists in the cache.
    pub fn contains(&self, key: &K) -> bool {
        self.inner.lock().contains(key)
    }

    /// Returns the number of entries in the cache.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns `true` if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Returns the maximum capacity, or `None` for unbounded policies.
    pub fn capacity(&self) -> Option<usize> {
        self.inner.lock().capacity()
    }

    /// Clears all entries from the cache.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Runs a closure against the cache while holding the lock.
    ///
    /// Compound sequences (check-then-put, drain loops) are atomic only when
    /// issued through a single `with` call; back-to-back method calls can
    /// interleave with other handles.
    ///
    /// # Example
    ///
    /// ```
    /// use evicache::policy::lfu::LfuCache;
    /// use evicache::sync::SyncCache;
    ///
    /// let cache = SyncCache::new(LfuCache::new(10).unwrap());
    /// cache.put("config", 1);
    ///
    /// let value = cache.with(|c| {
    ///     if !c.contains(&"config") {
    ///         c.put("config", 0);
    ///     }
    ///     c.get(&"config").copied()
    /// });
    /// assert_eq!(value, Some(1));
    /// ```
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut C) -> R,
    {
        f(&mut self.inner.lock())
    }
}

impl<K, V, C> SyncCache<K, V, C>
where
    C: MutableCache<K, V>,
{
    /// Removes a key, returning its value.
    pub fn remove(&self, key: &K) -> Option<V> {
        self.inner.lock().remove(key)
    }

    /// Removes multiple keys under one lock, returning values in input order.
    pub fn remove_batch(&self, keys: &[K]) -> Vec<Option<V>> {
        let mut inner = self.inner.lock();
        keys.iter().map(|k| inner.remove(k)).collect()
    }
}
