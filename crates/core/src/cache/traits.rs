use async_trait::async_trait;

use super::{CacheKey, CachedValue, Result};

/// Trait for cache store backends.
///
/// A store is a mapping from [`CacheKey`] to an immutable stored value. It
/// knows nothing about the computations whose results it holds; the memoizer
/// layers hit/miss semantics on top of these operations.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Gets the stored value for a key, if present.
    async fn get(&self, key: &CacheKey) -> Result<Option<CachedValue>>;

    /// Stores a value under a key, replacing any previous entry.
    async fn insert(&self, key: CacheKey, value: CachedValue) -> Result<()>;

    /// Discards every entry. Intended for explicit teardown of a store.
    async fn clear(&self) -> Result<()>;

    /// Returns the number of stored entries.
    async fn len(&self) -> Result<usize>;
}
