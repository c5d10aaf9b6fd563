pub mod hashmap;

pub use hashmap::{HashMapStore, StoreMetrics};
