//! HashMap-backed key/value store.
//!
//! ## Architecture
//! - Entries live in an `FxHashMap<K, V>` for O(1) average lookup.
//! - Capacity is enforced by entry count, not byte size, and is optional:
//!   `None` means the store never reports fullness.
//! - The store never evicts on its own. Policies decide which entry leaves
//!   and call [`HashMapStore::evict`] so the departure is counted as an
//!   eviction rather than a caller remove.
//!
//! ## Key Components
//! - `HashMapStore`: single-threaded store with optional capacity.
//! - `StoreMetrics`: plain counter snapshot (hits, misses, inserts, updates,
//!   removes, evictions).
//!
//! ## Core Operations
//! - `put`: insert or update by key, returns the replaced value.
//! - `get`: fetch by key (updates hit/miss metrics).
//! - `peek`: fetch by key without touching metrics.
//! - `remove` / `evict`: delete by key, counted separately.
//!
//! ## Example Usage
//! ```rust
//! use evicache::store::HashMapStore;
//!
//! let mut store: HashMapStore<u64, String> = HashMapStore::bounded(2).unwrap();
//! store.put(1, "a".to_string());
//! assert!(store.contains(&1));
//! assert!(!store.is_full());
//! ```
//!
//! ## Type Constraints
//! - `K: Eq + Hash` for key lookup.

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::error::ConfigError;

/// Snapshot of store usage counters.
///
/// Plain data: copy it out via [`HashMapStore::metrics`] and diff two
/// snapshots to measure a window.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StoreMetrics {
    /// Lookups that found a value.
    pub hits: u64,
    /// Lookups that found nothing.
    pub misses: u64,
    /// Writes that created a new entry.
    pub inserts: u64,
    /// Writes that replaced an existing value.
    pub updates: u64,
    /// Entries removed at the caller's request.
    pub removes: u64,
    /// Entries removed by policy decision.
    pub evictions: u64,
}

impl StoreMetrics {
    /// Total number of lookups, hit or miss.
    pub fn total_accesses(&self) -> u64 {
        self.hits + self.misses
    }

    /// Fraction of lookups that hit; `0.0` when nothing was looked up.
    pub fn hit_rate(&self) -> f64 {
        let total = self.total_accesses();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Increment hit counter.
    #[inline]
    fn inc_hit(&mut self) {
        self.hits += 1;
    }

    /// Increment miss counter.
    #[inline]
    fn inc_miss(&mut self) {
        self.misses += 1;
    }

    /// Increment insert counter.
    #[inline]
    fn inc_insert(&mut self) {
        self.inserts += 1;
    }

    /// Increment update counter.
    #[inline]
    fn inc_update(&mut self) {
        self.updates += 1;
    }

    /// Increment remove counter.
    #[inline]
    fn inc_remove(&mut self) {
        self.removes += 1;
    }

    /// Increment eviction counter.
    #[inline]
    fn inc_eviction(&mut self) {
        self.evictions += 1;
    }
}

/// Single-threaded HashMap-backed store with optional capacity.
#[derive(Debug)]
pub struct HashMapStore<K, V> {
    map: FxHashMap<K, V>,
    capacity: Option<usize>,
    metrics: StoreMetrics,
}

impl<K, V> HashMapStore<K, V>
where
    K: Eq + Hash,
{
    /// Create a store that holds at most `capacity` entries.
    ///
    /// Returns an error when `capacity` is zero.
    pub fn bounded(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new("cache capacity must be greater than zero"));
        }
        Ok(Self {
            map: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            capacity: Some(capacity),
            metrics: StoreMetrics::default(),
        })
    }

    /// Create a store with no capacity limit.
    pub fn unbounded() -> Self {
        Self {
            map: FxHashMap::default(),
            capacity: None,
            metrics: StoreMetrics::default(),
        }
    }

    /// Fetch a value by key, counting the access as a hit or a miss.
    #[inline]
    pub fn get(&mut self, key: &K) -> Option<&V> {
        match self.map.get(key) {
            Some(value) => {
                self.metrics.inc_hit();
                Some(value)
            },
            None => {
                self.metrics.inc_miss();
                None
            },
        }
    }

    /// Fetch a value by key without touching access counters.
    #[inline]
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.map.get(key)
    }

    /// Insert or update an entry, returning the replaced value.
    #[inline]
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let previous = self.map.insert(key, value);
        if previous.is_some() {
            self.metrics.inc_update();
        } else {
            self.metrics.inc_insert();
        }
        previous
    }

    /// Remove an entry at the caller's request.
    #[inline]
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let removed = self.map.remove(key);
        if removed.is_some() {
            self.metrics.inc_remove();
        }
        removed
    }

    /// Remove an entry the policy chose as a victim.
    #[inline]
    pub fn evict(&mut self, key: &K) -> Option<V> {
        let evicted = self.map.remove(key);
        if evicted.is_some() {
            self.metrics.inc_eviction();
        }
        evicted
    }

    /// Check whether a key exists. Never touches the metrics.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Return the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Return `true` if the store holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Return the configured capacity, `None` for unbounded stores.
    #[inline]
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Return `true` once the store has reached its capacity.
    ///
    /// Unbounded stores are never full.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.capacity.map_or(false, |cap| self.map.len() >= cap)
    }

    /// Return `true` if the store holds more entries than its capacity.
    ///
    /// Write-through policies insert first and evict second; this is `true`
    /// exactly in the window between those two steps.
    #[inline]
    pub fn over_capacity(&self) -> bool {
        self.capacity.map_or(false, |cap| self.map.len() > cap)
    }

    /// Drop all entries. Metrics survive; they describe the store's history,
    /// not its current contents.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Iterate over entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.map.iter()
    }

    /// Iterate over keys in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.map.keys()
    }

    /// Snapshot store metrics.
    #[inline]
    pub fn metrics(&self) -> StoreMetrics {
        self.metrics
    }
}

impl<K, V> Default for HashMapStore<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::unbounded()
    }
}
