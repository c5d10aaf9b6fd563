pub use crate::ds::OrderList;
pub use crate::error::ConfigError;
pub use crate::notify::{DiscardSink, LogDiscardSink, RecordingSink};
pub use crate::policy::fifo::FifoCache;
pub use crate::policy::lfu::LfuCache;
pub use crate::policy::lifo::LifoCache;
pub use crate::policy::lru::LruCache;
pub use crate::policy::mru::MruCache;
pub use crate::policy::unbounded::UnboundedCache;
pub use crate::store::{HashMapStore, StoreMetrics};
pub use crate::sync::SyncCache;
pub use crate::traits::{Cache, MutableCache};
