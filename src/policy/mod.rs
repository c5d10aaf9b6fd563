//! Eviction policy implementations.
//!
//! Every policy exposes the same surface (`put`, `get`, `remove`, `clear`,
//! metrics, a discard sink) and differs only in which entry it sacrifices
//! when full:
//!
//! | Policy                          | Victim                                  |
//! |---------------------------------|-----------------------------------------|
//! | [`UnboundedCache`]              | never evicts                            |
//! | [`FifoCache`]                   | oldest insertion                        |
//! | [`LifoCache`]                   | the insertion before the overflowing put |
//! | [`LruCache`]                    | least recently used                     |
//! | [`MruCache`]                    | most recently used                      |
//! | [`LfuCache`]                    | lowest access count, LRU tie-break      |

pub mod fifo;
pub mod lfu;
pub mod lifo;
pub mod lru;
pub mod mru;
pub mod unbounded;

pub use fifo::FifoCache;
pub use lfu::LfuCache;
pub use lifo::LifoCache;
pub use lru::LruCache;
pub use mru::MruCache;
pub use unbounded::UnboundedCache;
