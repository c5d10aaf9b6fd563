//! Discard notification side channel.
//!
//! Bounded policies surface every evicted key through a [`DiscardSink`]. The
//! sink is the only eviction callback surface: it receives the key after the
//! entry is fully gone, and whatever it does stays off the return path of
//! `put`.
//!
//! ## Key Components
//! - [`DiscardSink`]: the sink trait policies call on eviction.
//! - [`LogDiscardSink`]: default sink, logs `DISCARD: <key>` via `tracing`.
//! - [`RecordingSink`]: buffering sink; clones share one buffer, so tests can
//!   keep a handle and assert on what the cache discarded.
//!
//! ## Example Usage
//! ```
//! use evicache::notify::RecordingSink;
//! use evicache::policy::lifo::LifoCache;
//!
//! let sink = RecordingSink::new();
//! let mut cache = LifoCache::with_sink(2, sink.clone()).unwrap();
//!
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.put("c", 3); // evicts "b", the previous insertion
//!
//! assert_eq!(sink.discards(), vec!["b"]);
//! ```

use std::cell::RefCell;
use std::fmt::Display;
use std::rc::Rc;

/// Receives the key of every entry a bounded policy evicts.
///
/// Implementations must not assume the key is still in the cache: the sink
/// fires after the entry has been removed from every internal structure.
pub trait DiscardSink<K> {
    /// Called once per eviction with the evicted key.
    fn on_discard(&mut self, key: &K);
}

/// Default sink: emits one `DISCARD: <key>` log line per eviction.
///
/// The line goes to the `evicache::discard` target at info level, so
/// embedders can route or silence it with a normal `tracing` filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiscardSink;

impl<K> DiscardSink<K> for LogDiscardSink
where
    K: Display,
{
    fn on_discard(&mut self, key: &K) {
        tracing::info!(target: "evicache::discard", "DISCARD: {}", key);
    }
}

/// Sink that buffers discarded keys in insertion order.
///
/// Cloning is cheap and every clone shares the same buffer, so a test can
/// keep one handle, hand a clone to the cache, and read the buffer back
/// after driving evictions.
#[derive(Debug)]
pub struct RecordingSink<K> {
    log: Rc<RefCell<Vec<K>>>,
}

impl<K> RecordingSink<K> {
    /// Creates a sink with an empty buffer.
    pub fn new() -> Self {
        Self {
            log: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Returns the number of discards recorded so far.
    pub fn len(&self) -> usize {
        self.log.borrow().len()
    }

    /// Returns `true` if nothing has been discarded yet.
    pub fn is_empty(&self) -> bool {
        self.log.borrow().is_empty()
    }

    /// Empties the buffer.
    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }
}

impl<K: Clone> RecordingSink<K> {
    /// Copies the buffered keys out, oldest discard first.
    pub fn discards(&self) -> Vec<K> {
        self.log.borrow().clone()
    }
}

impl<K> Clone for RecordingSink<K> {
    fn clone(&self) -> Self {
        Self {
            log: Rc::clone(&self.log),
        }
    }
}

impl<K> Default for RecordingSink<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone> DiscardSink<K> for RecordingSink<K> {
    fn on_discard(&mut self, key: &K) {
        self.log.borrow_mut().push(key.clone());
    }
}
