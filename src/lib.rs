//! evicache: bounded in-memory key/value caches with pluggable eviction
//! policies.
//!
//! See `DESIGN.md` for internal architecture and invariants.

pub mod ds;
pub mod error;
pub mod notify;
pub mod policy;
pub mod prelude;
pub mod store;
pub mod sync;
pub mod traits;
