//! Type-tagged payloads stored by the cache.
//!
//! The cache does not interpret what it stores. A [`CacheValue`] is a shared
//! `Arc<dyn Any + Send + Sync>` plus a [`ValueType`] recorded when the value
//! was created, so a pinned entry can refuse an overwrite that would change
//! its shape.
//!
//! ## Aliasing
//!
//! Values are never deep-copied. Every [`CacheValue`] clone and every
//! `Arc<T>` returned by [`CacheValue::downcast`] points at the same
//! allocation, so interior mutation (e.g. through an `Arc<Mutex<T>>`
//! payload) is visible to later reads.
//!
//! ```
//! use pincache::store::value::CacheValue;
//! use std::sync::{Arc, Mutex};
//!
//! let state = Arc::new(Mutex::new(0u32));
//! let value = CacheValue::from_arc(Arc::clone(&state));
//! *state.lock().unwrap() += 1;
//!
//! let read: Arc<Mutex<u32>> = value.downcast().unwrap();
//! assert_eq!(*read.lock().unwrap(), 1);
//! ```

use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::error::CacheError;

/// Runtime type tag of a cached payload.
///
/// Equality and hashing use the [`TypeId`] only; the name is kept for
/// diagnostics.
#[derive(Clone, Copy)]
pub struct ValueType {
    id: TypeId,
    name: &'static str,
}

impl ValueType {
    /// Tag for the concrete type `T`.
    pub fn of<T: Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Human-readable type name (not guaranteed stable across compilers).
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for ValueType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ValueType {}

impl Hash for ValueType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Shared, type-tagged cache payload.
#[derive(Clone)]
pub struct CacheValue {
    inner: Arc<dyn Any + Send + Sync>,
    value_type: ValueType,
}

impl CacheValue {
    /// Wraps an owned value.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self::from_arc(Arc::new(value))
    }

    /// Wraps an already shared value without copying it.
    pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
        Self {
            inner: value,
            value_type: ValueType::of::<T>(),
        }
    }

    /// Wraps an optional value, rejecting `None` the way a null payload is
    /// rejected.
    ///
    /// # Errors
    ///
    /// [`CacheError::InvalidArgument`] when `value` is `None`.
    pub fn try_from_option<T: Any + Send + Sync>(value: Option<T>) -> Result<Self, CacheError> {
        value.map(Self::new).ok_or_else(|| {
            CacheError::InvalidArgument(format!(
                "cache value of type `{}` must not be None",
                type_name::<T>()
            ))
        })
    }

    /// Type tag recorded at construction.
    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// Returns `true` if the payload is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.value_type.id == TypeId::of::<T>()
    }

    /// Shared handle to the payload as a `T`, or `None` on a type mismatch.
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        Arc::clone(&self.inner).downcast::<T>().ok()
    }

    /// Borrows the payload as a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Returns `true` if both values share the same allocation.
    pub fn ptr_eq(&self, other: &CacheValue) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for CacheValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheValue")
            .field("type", &self.value_type)
            .finish_non_exhaustive()
    }
}
