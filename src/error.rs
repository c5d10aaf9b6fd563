//! Error types for the evicache library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when cache configuration parameters are invalid
//!   (the only invalid parameter is a zero capacity).
//!
//! ## Example Usage
//!
//! ```
//! use evicache::error::ConfigError;
//! use evicache::policy::lifo::LifoCache;
//!
//! // Fallible constructor for user-configurable parameters
//! let cache: Result<LifoCache<String, i32>, ConfigError> = LifoCache::new(100);
//! assert!(cache.is_ok());
//!
//! // Zero capacity is caught without panicking
//! let bad = LifoCache::<String, i32>::new(0);
//! assert!(bad.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when cache configuration parameters are invalid.
///
/// Produced by the fallible constructors of every bounded policy
/// (e.g. [`LfuCache::new`](crate::policy::lfu::LfuCache::new)). Carries a
/// human-readable description of which parameter failed validation.
///
/// # Example
///
/// ```
/// use evicache::policy::lfu::LfuCache;
///
/// let err = LfuCache::<u64, u64>::new(0).unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
