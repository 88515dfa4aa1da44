//! Error types for the pincache library.
//!
//! ## Key Components
//!
//! - [`CacheError`]: Returned by cache operations (`get`, `put`,
//!   `remove_permanent`). A [`CacheError::NotFound`] is an ordinary miss and
//!   callers are expected to fall back to their primary data source.
//! - [`ConfigError`]: Returned when cache configuration parameters are invalid
//!   (e.g. zero initial capacity, zero growth step).
//! - [`InvariantError`]: Returned when internal data-structure invariants are
//!   violated (`check_invariants` methods).
//!
//! ## Example Usage
//!
//! ```
//! use pincache::error::{CacheError, ConfigError};
//! use pincache::PinnedCache;
//!
//! let bad: Result<PinnedCache, ConfigError> = PinnedCache::new(0);
//! assert!(bad.is_err());
//!
//! let cache = PinnedCache::new(4).unwrap();
//! assert!(matches!(cache.get("missing"), Err(CacheError::NotFound(_))));
//! ```

use thiserror::Error;

// ---------------------------------------------------------------------------
// CacheError
// ---------------------------------------------------------------------------

/// Failure of a single cache operation.
///
/// Every variant leaves the cache exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    /// The key is not cached.
    #[error("key `{0}` is not cached")]
    NotFound(String),

    /// Caller passed a null-equivalent key or value.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A pinned entry may only be overwritten with a value of the same type.
    #[error("pinned entry `{key}` holds `{expected}`, refusing to overwrite it with `{actual}`")]
    PinnedTypeMismatch {
        key: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// `remove_permanent` was called on an entry that is not pinned.
    #[error("entry `{0}` is not pinned")]
    NotPinned(String),

    /// A typed read asked for a different type than the one stored.
    #[error("entry `{key}` holds `{stored}`, not `{requested}`")]
    TypeMismatch {
        key: String,
        stored: &'static str,
        requested: &'static str,
    },
}

impl CacheError {
    /// Returns `true` for an ordinary cache miss.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CacheError::NotFound(_))
    }
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when cache configuration parameters are invalid.
///
/// Produced by [`PinnedCache::new`](crate::PinnedCache::new),
/// [`CacheConfig::validate`](crate::builder::CacheConfig::validate) and
/// [`CacheBuilder::try_build`](crate::builder::CacheBuilder::try_build).
///
/// # Example
///
/// ```
/// use pincache::builder::CacheBuilder;
///
/// let err = CacheBuilder::new(8).growth_step(0).try_build().unwrap_err();
/// assert!(err.to_string().contains("growth"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
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

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal cache invariants are violated.
///
/// Produced by [`PinnedLruCore::check_invariants`](crate::policy::pinned_lru::PinnedLruCore::check_invariants).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
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

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
