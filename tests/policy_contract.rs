// ==============================================
// CROSS-POLICY CONTRACT TESTS (integration)
// ==============================================
//
// Tests that verify the shared put/get contract and the documented eviction
// traces across every cache policy. These span multiple modules and belong
// here rather than in any single source file.

// ==============================================
// Capacity Bound
// ==============================================
//
// For every bounded policy, len() never exceeds capacity after any
// operation, no matter how the workload mixes puts, gets, and removes.

mod capacity_bound {
    use evicache::policy::fifo::FifoCache;
    use evicache::policy::lfu::LfuCache;
    use evicache::policy::lifo::LifoCache;
    use evicache::policy::lru::LruCache;
    use evicache::policy::mru::MruCache;
    use evicache::traits::MutableCache;

    /// Drives a mixed workload and checks the bound after every step.
    fn churn<C: MutableCache<u32, u32>>(cache: &mut C, capacity: usize) {
        for i in 0..300u32 {
            cache.put(i % 37, i);
            assert!(
                cache.len() <= capacity,
                "len {} exceeded capacity {} after put",
                cache.len(),
                capacity
            );
            cache.get(&(i % 11));
            assert!(cache.len() <= capacity, "len grew on a get");
            if i % 13 == 0 {
                cache.remove(&(i % 7));
                assert!(cache.len() <= capacity, "len grew on a remove");
            }
        }
    }

    #[test]
    fn fifo_stays_within_capacity() {
        churn(&mut FifoCache::new(8).unwrap(), 8);
    }

    #[test]
    fn lifo_stays_within_capacity() {
        churn(&mut LifoCache::new(8).unwrap(), 8);
    }

    #[test]
    fn lru_stays_within_capacity() {
        churn(&mut LruCache::new(8).unwrap(), 8);
    }

    #[test]
    fn mru_stays_within_capacity() {
        churn(&mut MruCache::new(8).unwrap(), 8);
    }

    #[test]
    fn lfu_stays_within_capacity() {
        churn(&mut LfuCache::new(8).unwrap(), 8);
    }

    #[test]
    fn capacity_one_still_works_everywhere() {
        churn(&mut FifoCache::new(1).unwrap(), 1);
        churn(&mut LifoCache::new(1).unwrap(), 1);
        churn(&mut LruCache::new(1).unwrap(), 1);
        churn(&mut MruCache::new(1).unwrap(), 1);
        churn(&mut LfuCache::new(1).unwrap(), 1);
    }
}

// ==============================================
// Zero-Capacity Construction
// ==============================================
//
// No bounded policy accepts capacity=0: there is no data model under it, so
// construction is the one place the library fails fast.

mod zero_capacity {
    use evicache::policy::fifo::FifoCache;
    use evicache::policy::lfu::LfuCache;
    use evicache::policy::lifo::LifoCache;
    use evicache::policy::lru::LruCache;
    use evicache::policy::mru::MruCache;

    const MESSAGE: &str = "cache capacity must be greater than zero";

    #[test]
    fn every_bounded_policy_rejects_it() {
        assert_eq!(FifoCache::<u32, u32>::new(0).unwrap_err().message(), MESSAGE);
        assert_eq!(LifoCache::<u32, u32>::new(0).unwrap_err().message(), MESSAGE);
        assert_eq!(LruCache::<u32, u32>::new(0).unwrap_err().message(), MESSAGE);
        assert_eq!(MruCache::<u32, u32>::new(0).unwrap_err().message(), MESSAGE);
        assert_eq!(LfuCache::<u32, u32>::new(0).unwrap_err().message(), MESSAGE);
    }

    #[test]
    fn capacity_one_is_the_smallest_valid_cache() {
        let mut cache = LruCache::new(1).unwrap();
        cache.put("only", 1);
        assert_eq!(cache.get(&"only"), Some(&1));
    }
}

// ==============================================
// Unbounded Growth
// ==============================================

mod unbounded_growth {
    use evicache::policy::unbounded::UnboundedCache;

    #[test]
    fn last_write_wins_and_size_is_unconstrained() {
        let mut cache = UnboundedCache::new();
        for i in 0..1_000u32 {
            cache.put(i, i);
        }
        for i in 0..500u32 {
            cache.put(i, i + 1_000);
        }

        assert_eq!(cache.len(), 1_000, "overwrites must not grow the cache");
        assert_eq!(cache.capacity(), None);
        assert_eq!(cache.get(&0), Some(&1_000), "latest write wins");
        assert_eq!(cache.get(&499), Some(&1_499));
        assert_eq!(cache.get(&500), Some(&500), "untouched keys keep their value");
        assert_eq!(cache.metrics().evictions, 0);
    }
}

// ==============================================
// Documented Eviction Traces
// ==============================================
//
// One canonical trace per policy, pinning down which key each policy
// sacrifices and what the discard channel reports.

mod documented_traces {
    use evicache::notify::RecordingSink;
    use evicache::policy::fifo::FifoCache;
    use evicache::policy::lfu::LfuCache;
    use evicache::policy::lifo::LifoCache;
    use evicache::policy::lru::LruCache;
    use evicache::policy::mru::MruCache;

    #[test]
    fn fifo_evicts_the_oldest_insertion() {
        let sink = RecordingSink::new();
        let mut cache = FifoCache::with_sink(2, sink.clone()).unwrap();

        cache.put("a", 1);
        cache.put("b", 2);
        cache.put("c", 3);

        assert_eq!(sink.discards(), vec!["a"]);
        assert_eq!(cache.get(&"a"), None);
        assert_eq!(cache.get(&"b"), Some(&2));
        assert_eq!(cache.get(&"c"), Some(&3));
    }

    #[test]
    fn lifo_evicts_the_insertion_before_the_overflowing_put() {
        let sink = RecordingSink::new();
        let mut cache = LifoCache::with_sink(2, sink.clone()).unwrap();

        cache.put("a", 1);
        cache.put("b", 2);
        cache.put("c", 3);

        assert_eq!(sink.discards(), vec!["b"]);
        assert_eq!(cache.get(&"b"), None);
        assert_eq!(cache.get(&"a"), Some(&1), "earliest insertion is pinned");
        assert_eq!(cache.get(&"c"), Some(&3), "the new entry always lands");
    }

    #[test]
    fn lru_evicts_the_least_recently_used() {
        let sink = RecordingSink::new();
        let mut cache = LruCache::with_sink(2, sink.clone()).unwrap();

        cache.put("a", 1);
        cache.put("b", 2);
        cache.get(&"a"); // "b" is now the coldest
        cache.put("c", 3);

        assert_eq!(sink.discards(), vec!["b"]);
        assert_eq!(cache.get(&"b"), None);
        assert_eq!(cache.get(&"a"), Some(&1));
        assert_eq!(cache.get(&"c"), Some(&3));
    }

    #[test]
    fn mru_evicts_the_most_recently_used() {
        let sink = RecordingSink::new();
        let mut cache = MruCache::with_sink(2, sink.clone()).unwrap();

        cache.put("a", 1);
        cache.put("b", 2);
        cache.get(&"a"); // "a" is now the hottest, and the victim
        cache.put("c", 3);

        assert_eq!(sink.discards(), vec!["a"]);
        assert_eq!(cache.get(&"a"), None);
        assert_eq!(cache.get(&"b"), Some(&2));
        assert_eq!(cache.get(&"c"), Some(&3));
    }

    #[test]
    fn lfu_evicts_the_lowest_frequency() {
        let sink = RecordingSink::new();
        let mut cache = LfuCache::with_sink(2, sink.clone()).unwrap();

        cache.put("a", 1);
        cache.put("b", 2);
        cache.get(&"a"); // freq a=2, b=1
        cache.put("c", 3);

        assert_eq!(sink.discards(), vec!["b"]);
        assert_eq!(cache.get(&"b"), None);
        assert_eq!(cache.get(&"a"), Some(&1));
        assert_eq!(cache.get(&"c"), Some(&3));
    }

    #[test]
    fn lfu_breaks_frequency_ties_by_recency() {
        let sink = RecordingSink::new();
        let mut cache = LfuCache::with_sink(2, sink.clone()).unwrap();

        cache.put("a", 1);
        cache.put("b", 2);
        // Both sit at frequency 1; "a" was touched longer ago.
        cache.put("c", 3);

        assert_eq!(sink.discards(), vec!["a"]);
        assert_eq!(cache.get(&"a"), None);
        assert_eq!(cache.get(&"b"), Some(&2));
        assert_eq!(cache.get(&"c"), Some(&3));
    }
}

// ==============================================
// Miss Idempotence
// ==============================================
//
// A get on an absent key returns None and changes nothing: no entry is
// created, no order is disturbed, no eviction fires.

mod miss_idempotence {
    use evicache::notify::RecordingSink;
    use evicache::policy::fifo::FifoCache;
    use evicache::policy::lfu::LfuCache;
    use evicache::policy::lifo::LifoCache;
    use evicache::policy::lru::LruCache;
    use evicache::policy::mru::MruCache;
    use evicache::policy::unbounded::UnboundedCache;
    use evicache::traits::Cache;

    fn probe_missing<C: Cache<u32, u32>>(cache: &mut C) {
        cache.put(1, 10);
        cache.put(2, 20);
        let before = cache.len();

        for _ in 0..50 {
            assert_eq!(cache.get(&99), None);
        }

        assert_eq!(cache.len(), before, "a miss must not create an entry");
        assert!(cache.contains(&1));
        assert!(cache.contains(&2));
    }

    #[test]
    fn misses_never_create_entries() {
        probe_missing(&mut FifoCache::new(4).unwrap());
        probe_missing(&mut LifoCache::new(4).unwrap());
        probe_missing(&mut LruCache::new(4).unwrap());
        probe_missing(&mut MruCache::new(4).unwrap());
        probe_missing(&mut LfuCache::new(4).unwrap());
        probe_missing(&mut UnboundedCache::new());
    }

    #[test]
    fn misses_do_not_disturb_the_lru_victim() {
        let sink = RecordingSink::new();
        let mut cache = LruCache::with_sink(2, sink.clone()).unwrap();

        cache.put("a", 1);
        cache.put("b", 2);
        for _ in 0..10 {
            cache.get(&"ghost");
        }
        cache.put("c", 3);

        // "a" is still the coldest: the misses refreshed nothing.
        assert_eq!(sink.discards(), vec!["a"]);
    }

    #[test]
    fn misses_leave_lfu_counters_alone() {
        let mut cache = LfuCache::new(4).unwrap();
        cache.put("a", 1);

        for _ in 0..10 {
            cache.get(&"ghost");
        }

        assert_eq!(cache.frequency(&"a"), Some(1));
        assert_eq!(cache.frequency(&"ghost"), None);
        assert_eq!(cache.metrics().misses, 10);
        assert_eq!(cache.metrics().evictions, 0);
    }
}

// ==============================================
// Overwrite Law
// ==============================================
//
// put(K, V1); put(K, V2) replaces the value without growing the cache or
// discarding anything; LFU counts the overwrite as exactly one access.

mod overwrite_law {
    use evicache::notify::RecordingSink;
    use evicache::policy::fifo::FifoCache;
    use evicache::policy::lfu::LfuCache;
    use evicache::policy::lifo::LifoCache;
    use evicache::policy::lru::LruCache;
    use evicache::policy::mru::MruCache;
    use evicache::policy::unbounded::UnboundedCache;
    use evicache::traits::Cache;

    fn overwrite<C: Cache<&'static str, i32>>(cache: &mut C) {
        assert_eq!(cache.put("k", 1), None);
        assert_eq!(cache.put("k", 2), Some(1));
        assert_eq!(cache.get(&"k"), Some(&2));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn value_is_replaced_in_every_policy() {
        overwrite(&mut UnboundedCache::new());
        overwrite(&mut FifoCache::new(4).unwrap());
        overwrite(&mut LifoCache::new(4).unwrap());
        overwrite(&mut LruCache::new(4).unwrap());
        overwrite(&mut MruCache::new(4).unwrap());
        overwrite(&mut LfuCache::new(4).unwrap());
    }

    #[test]
    fn overwrite_at_capacity_never_discards() {
        let sink = RecordingSink::new();
        let mut cache = LfuCache::with_sink(2, sink.clone()).unwrap();

        cache.put("a", 1);
        cache.put("b", 2);
        cache.put("a", 10);
        cache.put("b", 20);

        assert!(sink.is_empty(), "overwrites must never evict");
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn lfu_counts_the_overwrite_as_exactly_one_access() {
        let mut cache = LfuCache::new(4).unwrap();
        cache.put("k", 1);
        cache.get(&"k");
        let before = cache.frequency(&"k");

        cache.put("k", 2);

        assert_eq!(before, Some(2));
        assert_eq!(cache.frequency(&"k"), Some(3));
    }
}

// ==============================================
// Policy Interchange
// ==============================================
//
// The whole point of the trait pair: call sites written against
// MutableCache work with any policy, chosen at runtime.

mod policy_interchange {
    use evicache::policy::fifo::FifoCache;
    use evicache::policy::lfu::LfuCache;
    use evicache::policy::lifo::LifoCache;
    use evicache::policy::lru::LruCache;
    use evicache::policy::mru::MruCache;
    use evicache::policy::unbounded::UnboundedCache;
    use evicache::traits::MutableCache;

    #[test]
    fn policies_swap_behind_a_trait_object() {
        let mut caches: Vec<Box<dyn MutableCache<u32, u32>>> = vec![
            Box::new(UnboundedCache::new()),
            Box::new(FifoCache::new(4).unwrap()),
            Box::new(LifoCache::new(4).unwrap()),
            Box::new(LruCache::new(4).unwrap()),
            Box::new(MruCache::new(4).unwrap()),
            Box::new(LfuCache::new(4).unwrap()),
        ];

        for cache in &mut caches {
            for i in 0..10u32 {
                cache.put(i, i * 10);
            }

            assert!(cache.capacity().map_or(true, |cap| cache.len() <= cap));
            assert!(cache.contains(&9), "the final write must be resident");
            assert_eq!(cache.remove(&9), Some(90));
            assert!(!cache.contains(&9));
        }
    }

    #[test]
    fn remove_batch_works_through_the_trait() {
        let mut cache: Box<dyn MutableCache<u32, &str>> =
            Box::new(LruCache::new(8).unwrap());
        cache.put(1, "one");
        cache.put(2, "two");
        cache.put(3, "three");

        let removed = cache.remove_batch(&[1, 99, 3]);

        assert_eq!(removed, vec![Some("one"), None, Some("three")]);
        assert_eq!(cache.len(), 1);
    }
}

// ==============================================
// Metrics Accounting
// ==============================================
//
// Every key that enters a cache leaves it by exactly one route: still
// resident, evicted, or removed by the caller.

mod metrics_accounting {
    use evicache::policy::fifo::FifoCache;
    use evicache::policy::lfu::LfuCache;
    use evicache::policy::lru::LruCache;

    #[test]
    fn inserts_are_conserved_across_eviction_and_removal() {
        let mut cache = FifoCache::new(4).unwrap();
        for i in 0..10u32 {
            cache.put(i, i);
        }
        cache.remove(&9);

        let metrics = cache.metrics();
        assert_eq!(metrics.inserts, 10);
        assert_eq!(metrics.evictions, 6);
        assert_eq!(metrics.removes, 1);
        assert_eq!(
            cache.len() as u64 + metrics.evictions + metrics.removes,
            metrics.inserts,
            "every insert is resident, evicted, or removed"
        );
    }

    #[test]
    fn hits_and_misses_are_counted_per_access() {
        let mut cache = LruCache::new(4).unwrap();
        cache.put("a", 1);

        cache.get(&"a");
        cache.get(&"a");
        cache.get(&"ghost");

        let metrics = cache.metrics();
        assert_eq!(metrics.hits, 2);
        assert_eq!(metrics.misses, 1);
        assert_eq!(metrics.total_accesses(), 3);
        assert!((metrics.hit_rate() - 2.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn overwrites_count_as_updates_not_inserts() {
        let mut cache = LfuCache::new(4).unwrap();
        cache.put("k", 1);
        cache.put("k", 2);
        cache.put("k", 3);

        let metrics = cache.metrics();
        assert_eq!(metrics.inserts, 1);
        assert_eq!(metrics.updates, 2);
    }
}
