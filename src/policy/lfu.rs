//! # LFU (Least Frequently Used) Cache Implementation
//!
//! Evicts the entry with the fewest accesses when capacity is reached, making
//! it a good fit for workloads with stable access patterns where hot items
//! should survive bursts of one-off traffic. Among equally-infrequent entries
//! the least recently used one is evicted, so the policy degrades to LRU when
//! every entry is equally cold.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────┐
//!   │                        LfuCache<K, V>                            │
//!   │                                                                  │
//!   │   freq (FxHashMap<K, u64>)        order (OrderList<K>)          │
//!   │   ┌─────────┬────────────┐        ┌──────────────────────────┐  │
//!   │   │   Key   │  Accesses  │        │ Front          Back      │  │
//!   │   ├─────────┼────────────┤        │ [p3] [p2] [p4] [p1]      │  │
//!   │   │ page_1  │  15  hot   │        │  ↑              ↑        │  │
//!   │   │ page_2  │   3  warm  │        │ least         most       │  │
//!   │   │ page_3  │   1  cold  │        │ recent        recent     │  │
//!   │   │ page_4  │   7  warm  │        │ (tie-break)              │  │
//!   │   └─────────┴────────────┘        └──────────────────────────┘  │
//!   │                                                                  │
//!   │   store (HashMapStore<K, V>)  values and access metrics          │
//!   └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## LFU vs LRU
//!
//! ```text
//!   Access pattern: A, B, A, C, A, D  (A accessed repeatedly, others once)
//!   Cache capacity: 3
//!
//!   LRU (recency-based):
//!     Insert D evicts B, the least recent. Keep scanning long enough and
//!     A is eventually flushed despite being the hottest key.
//!
//!   LFU (frequency-based):
//!     Insert D evicts the coldest of {B, C} (freq 1). A's count keeps it
//!     resident no matter how many cold keys stream past.
//! ```
//!
//! ## Eviction Flow
//!
//! ```text
//!   put(key, value)
//!        │
//!        ▼
//!   ┌──────────────────────────────────────────────────────────┐
//!   │ Key already present?                                     │
//!   │                                                          │
//!   │   YES → Overwrite value, frequency += 1, refresh         │
//!   │         recency. No eviction (entry count unchanged).    │
//!   │   NO  → Continue to capacity check                       │
//!   └──────────────────────────────────────────────────────────┘
//!        │
//!        ▼
//!   ┌──────────────────────────────────────────────────────────┐
//!   │ Cache at capacity?                                       │
//!   │                                                          │
//!   │   1. Walk the recency list from least to most recent     │
//!   │   2. Keep the entry with the strictly lowest count       │
//!   │      (ties keep the earlier, least recent entry)         │
//!   │   3. Evict it, notify the sink                           │
//!   └──────────────────────────────────────────────────────────┘
//!        │
//!        ▼
//!   Insert new entry with frequency = 1 at the most-recent end
//! ```
//!
//! ## Frequency Lifecycle
//!
//! ```text
//!   put(new key)            → frequency = 1
//!   get hit                 → frequency += 1, moves to most recent
//!   put(existing key)       → frequency += 1, moves to most recent
//!   peek / contains         → no change
//!   evicted / removed       → tracking dropped
//! ```
//!
//! ## Operations
//!
//! | Operation     | Time   | Notes                                      |
//! |---------------|--------|--------------------------------------------|
//! | `get`         | O(1)   | Hit bumps frequency and recency            |
//! | `put` (hit)   | O(1)   | Overwrite bumps frequency and recency      |
//! | `put` (full)  | O(n)   | Linear minimum-frequency scan per eviction |
//! | `frequency`   | O(1)   | Reads the counter without touching it      |
//! | `peek_lfu`    | O(n)   | Runs victim selection without evicting     |
//!
//! The linear victim scan trades throughput for simplicity. At the small
//! capacities this cache targets the scan is cheap; a bucketed frequency
//! list would pay off only at much larger sizes.
//!
//! ## Example Usage
//!
//! ```
//! use evicache::policy::lfu::LfuCache;
//!
//! let mut cache = LfuCache::new(2).unwrap();
//! cache.put("a", 1);
//! cache.put("b", 2);
//!
//! cache.get(&"a"); // freq: a=2, b=1
//! cache.put("c", 3); // discards "b", the coldest key
//!
//! assert_eq!(cache.get(&"a"), Some(&1));
//! assert!(!cache.contains(&"b"));
//! assert_eq!(cache.frequency(&"c"), Some(1));
//! ```
//!
//! ## When to Use
//!
//! **Use LFU when:**
//! - Access patterns are stable over time
//! - Hot reference data must survive scans (lookup tables, dictionaries)
//! - Recomputing a lost entry is expensive
//!
//! **Avoid LFU when:**
//! - Temporal locality dominates (use LRU)
//! - The hot set shifts rapidly; old counts pin stale entries (no aging)
//! - Capacities are large enough that O(n) eviction scans hurt
//!
//! ## References
//!
//! - Wikipedia: Cache replacement policies

use crate::ds::OrderList;
use crate::error::ConfigError;
use crate::notify::{DiscardSink, LogDiscardSink};
use crate::store::{HashMapStore, StoreMetrics};
use crate::traits::{Cache, MutableCache};
use rustc_hash::FxHashMap;
use std::fmt::{self, Display};
use std::hash::Hash;

/// LFU (Least Frequently Used) cache with a least-recently-used tie-break.
///
/// Every key carries an access count: 1 on insert, +1 on every hit and every
/// overwrite. When a new key arrives at capacity the entry with the lowest
/// count is evicted; counts that tie are broken by evicting the least
/// recently touched of the tied keys.
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
/// use evicache::policy::lfu::LfuCache;
///
/// let mut cache = LfuCache::new(100).unwrap();
/// cache.put("key1", "value1");
/// assert_eq!(cache.frequency(&"key1"), Some(1));
///
/// cache.get(&"key1");
/// assert_eq!(cache.frequency(&"key1"), Some(2));
/// ```
pub struct LfuCache<K, V, S = LogDiscardSink>
where
    K: Clone + Eq + Hash,
{
    /// Key/value storage with access metrics
    store: HashMapStore<K, V>,
    /// Access count per resident key, never below 1
    freq: FxHashMap<K, u64>,
    /// Keys from least to most recently touched, consulted on ties
    order: OrderList<K>,
    /// Receives every evicted key
    sink: S,
}

impl<K, V> LfuCache<K, V>
where
    K: Clone + Eq + Hash + Display,
{
    /// Creates an LFU cache that logs discards via `tracing`.
    ///
    /// Returns an error when `capacity` is zero. The default sink formats
    /// keys, so `K: Display` is required here; use
    /// [`with_sink`](Self::with_sink) for other key types.
    ///
    /// # Example
    ///
    /// ```
    /// use evicache::policy::lfu::LfuCache;
    ///
    /// let cache: LfuCache<String, i32> = LfuCache::new(100).unwrap();
    /// assert_eq!(cache.capacity(), Some(100));
    ///
    /// assert!(LfuCache::<String, i32>::new(0).is_err());
    /// ```
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        Self::with_sink(capacity, LogDiscardSink)
    }
}

impl<K, V, S> LfuCache<K, V, S>
where
    K: Clone + Eq + Hash,
    S: DiscardSink<K>,
{
    /// Creates an LFU cache that reports discards to `sink`.
    ///
    /// Returns an error when `capacity` is zero.
    pub fn with_sink(capacity: usize, sink: S) -> Result<Self, ConfigError> {
        Ok(Self {
            store: HashMapStore::bounded(capacity)?,
            freq: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            order: OrderList::with_capacity(capacity),
            sink,
        })
    }

    /// Stores a key-value pair, returning the previous value for the key.
    ///
    /// An overwrite increments the key's frequency by exactly one and
    /// refreshes its recency; the entry count is unchanged so nothing is
    /// evicted. A new key evicts the least frequently used entry first if
    /// the cache is full, then starts at frequency 1.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if let Some(count) = self.freq.get_mut(&key) {
            *count = count.saturating_add(1);
            self.order.move_to_back(&key);
            return self.store.put(key, value);
        }

        self.evict_if_needed();
        self.freq.insert(key.clone(), 1);
        self.order.push_back(key.clone());
        self.store.put(key, value)
    }

    /// Retrieves a value by key; a hit increments the key's frequency and
    /// refreshes its recency.
    ///
    /// A miss changes nothing beyond the miss counter: no frequency entry is
    /// created and no eviction state moves.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        if let Some(count) = self.freq.get_mut(key) {
            *count = count.saturating_add(1);
            self.order.move_to_back(key);
        }
        self.store.get(key)
    }

    /// Retrieves a value by key without touching metrics, frequency, or
    /// recency.
    #[inline]
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.store.peek(key)
    }

    /// Returns the access count for a key, or `None` if absent.
    ///
    /// Reading the count is not an access; the count does not change.
    #[inline]
    pub fn frequency(&self, key: &K) -> Option<u64> {
        self.freq.get(key).copied()
    }

    /// Returns the entry the next eviction would select, without evicting.
    ///
    /// Runs the same scan as eviction: lowest frequency wins, ties go to the
    /// least recently touched key.
    pub fn peek_lfu(&self) -> Option<(&K, &V)> {
        let key = self.select_victim()?;
        let value = self.store.peek(key)?;
        Some((key, value))
    }

    /// Returns `true` if the key exists in the cache.
    ///
    /// Does not count as an access.
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
    /// Drops the key's frequency and recency tracking. A caller remove is
    /// not an eviction: the sink is not notified.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let removed = self.store.remove(key);
        if removed.is_some() {
            self.freq.remove(key);
            self.order.remove(key);
        }
        removed
    }

    /// Clears all entries and their frequency tracking.
    pub fn clear(&mut self) {
        self.store.clear();
        self.freq.clear();
        self.order.clear();

        #[cfg(debug_assertions)]
        self.validate_invariants();
    }

    /// Iterates over entries from least to most recently touched.
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

    /// Walks the recency list front to back and keeps the entry with the
    /// strictly lowest count. Ties keep the earlier entry, so among tied
    /// keys the least recently touched one is selected.
    fn select_victim(&self) -> Option<&K> {
        let mut victim: Option<(&K, u64)> = None;
        for key in self.order.iter() {
            let count = self.freq.get(key).copied().unwrap_or(0);
            match victim {
                Some((_, best)) if count >= best => {},
                _ => victim = Some((key, count)),
            }
        }
        victim.map(|(key, _)| key)
    }

    /// Evicts minimum-frequency entries until there is room for one more.
    fn evict_if_needed(&mut self) {
        while self.store.is_full() {
            if let Some(victim) = self.select_victim().cloned() {
                if self.store.evict(&victim).is_some() {
                    self.sink.on_discard(&victim);
                }
                self.freq.remove(&victim);
                self.order.remove(&victim);
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
            self.freq.len(),
            "store and frequency map have different sizes"
        );
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
            debug_assert!(
                self.freq.get(key).is_some_and(|count| *count >= 1),
                "resident key without a positive access count"
            );
        }
        self.order.debug_validate_invariants();
    }
}

impl<K, V, S> fmt::Debug for LfuCache<K, V, S>
where
    K: Clone + Eq + Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LfuCache")
            .field("capacity", &self.store.capacity())
            .field("len", &self.store.len())
            .finish_non_exhaustive()
    }
}

impl<K, V, S> Cache<K, V> for LfuCache<K, V, S>
where
    K: Clone + Eq + Hash,
    S: DiscardSink<K>,
{
    #[inline]
    fn put(&mut self, key: K, value: V) -> Option<V> {
        LfuCache::put(self, key, value)
    }

    #[inline]
    fn get(&mut self, key: &K) -> Option<&V> {
        LfuCache::get(self, key)
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        LfuCache::contains(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        LfuCache::len(self)
    }

    #[inline]
    fn capacity(&self) -> Option<usize> {
        LfuCache::capacity(self)
    }

    fn clear(&mut self) {
        LfuCache::clear(self);
    }
}

impl<K, V, S> MutableCache<K, V> for LfuCache<K, V, S>
where
    K: Clone + Eq + Hash,
    S: DiscardSink<K>,
{
    #[inline]
    fn remove(&mut self, key: &K) -> Option<V> {
        LfuCache::remove(self, key)
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::notify::RecordingSink;
    use proptest::prelude::*;
    use std::collections::HashMap;

    #[derive(Debug, Clone)]
    enum Op {
        Put(u32, u32),
        Get(u32),
        Remove(u32),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u32..50, 0u32..100).prop_map(|(k, v)| Op::Put(k, v)),
            (0u32..50).prop_map(Op::Get),
            (0u32..50).prop_map(Op::Remove),
        ]
    }

    proptest! {
        /// len() never exceeds capacity under arbitrary operation mixes.
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_len_within_capacity(
            capacity in 1usize..30,
            ops in prop::collection::vec(op_strategy(), 0..200)
        ) {
            let mut cache = LfuCache::new(capacity).unwrap();
            for op in ops {
                match op {
                    Op::Put(k, v) => {
                        cache.put(k, v);
                    },
                    Op::Get(k) => {
                        cache.get(&k);
                    },
                    Op::Remove(k) => {
                        cache.remove(&k);
                    },
                }
                prop_assert!(cache.len() <= capacity);
            }
        }

        /// Counter map and recency order stay aligned with the store.
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_structures_stay_aligned(
            capacity in 1usize..20,
            ops in prop::collection::vec(op_strategy(), 0..150)
        ) {
            let mut cache = LfuCache::new(capacity).unwrap();
            for op in ops {
                match op {
                    Op::Put(k, v) => {
                        cache.put(k, v);
                    },
                    Op::Get(k) => {
                        cache.get(&k);
                    },
                    Op::Remove(k) => {
                        cache.remove(&k);
                    },
                }
                prop_assert_eq!(cache.iter().count(), cache.len());
                for (key, _) in cache.iter() {
                    prop_assert!(cache.frequency(key).map_or(false, |f| f >= 1));
                }
            }
        }

        /// The discarded key always carried the minimum frequency.
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_victim_has_minimum_frequency(
            capacity in 1usize..16,
            touches in prop::collection::vec(0u32..16, 0..64)
        ) {
            let sink = RecordingSink::new();
            let mut cache = LfuCache::with_sink(capacity, sink.clone()).unwrap();
            for i in 0..capacity as u32 {
                cache.put(i, i);
            }
            for key in touches {
                cache.get(&key);
            }

            let before: Vec<(u32, u64)> = cache
                .iter()
                .map(|(key, _)| (*key, cache.frequency(key).unwrap_or(0)))
                .collect();

            cache.put(9_999, 0);

            let discarded = sink.discards();
            prop_assert_eq!(discarded.len(), 1);
            let victim = discarded[0];
            let victim_freq = before
                .iter()
                .find(|(key, _)| *key == victim)
                .map(|(_, freq)| *freq);
            let min_freq = before.iter().map(|(_, freq)| *freq).min();
            prop_assert_eq!(victim_freq, min_freq);
        }

        /// With capacity at least the keyspace, the cache agrees with a
        /// plain map.
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_matches_map_when_never_full(
            ops in prop::collection::vec((0u32..20, 0u32..100), 0..200)
        ) {
            let mut cache = LfuCache::new(20).unwrap();
            let mut model = HashMap::new();
            for (key, value) in ops {
                prop_assert_eq!(cache.put(key, value), model.insert(key, value));
            }
            prop_assert_eq!(cache.len(), model.len());
            for (key, value) in &model {
                prop_assert_eq!(cache.peek(key), Some(value));
            }
        }

        /// Every insertion is accounted for: resident, discarded, or removed.
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_insertions_are_conserved(
            capacity in 1usize..16,
            ops in prop::collection::vec(op_strategy(), 0..200)
        ) {
            let sink = RecordingSink::new();
            let mut cache = LfuCache::with_sink(capacity, sink.clone()).unwrap();
            let mut inserts = 0u64;
            let mut removes = 0u64;
            for op in ops {
                match op {
                    Op::Put(k, v) => {
                        if cache.put(k, v).is_none() {
                            inserts += 1;
                        }
                    },
                    Op::Get(k) => {
                        cache.get(&k);
                    },
                    Op::Remove(k) => {
                        if cache.remove(&k).is_some() {
                            removes += 1;
                        }
                    },
                }
                prop_assert_eq!(
                    inserts,
                    cache.len() as u64 + sink.len() as u64 + removes
                );
            }
        }
    }
}
