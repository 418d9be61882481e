//! In-memory cache store.
//!
//! Thread-safe in-process store using tokio synchronization primitives over
//! an LRU map. The default configuration is unbounded: entries persist for
//! the lifetime of the store, which matches the memoization contract (a key,
//! once computed, stays computed). A bounded variant with LRU eviction is
//! available for long-running embedders that cannot let the store grow
//! without limit.

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::RwLock;

use memocache_core::cache::{Cache, CacheKey, CachedValue, Result};

/// A single stored entry.
///
/// Immutable once created; lookups clone the inner `Arc`, never the value.
#[derive(Clone)]
struct CacheEntry {
    value: CachedValue,
}

impl CacheEntry {
    fn new(value: CachedValue) -> Self {
        Self { value }
    }
}

/// Hit/miss counters for a store.
///
/// Counters are lookup-level: one memoized miss probes the store twice
/// (before and after taking its flight lock), so `misses` can exceed the
/// number of computations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups that found an entry.
    pub hits: u64,
    /// Lookups that found nothing.
    pub misses: u64,
    /// Entries currently stored.
    pub entries: usize,
}

#[derive(Debug, Default)]
struct Counters {
    hits: AtomicU64,
    misses: AtomicU64,
}

/// In-memory cache store.
///
/// Cheap to clone; clones share the same entries and counters. The store has
/// an explicit lifecycle: construct it at startup, share it via `Arc` or
/// clone, and drop it (or [`Cache::clear`] it) at teardown. There is no
/// module-level global state.
#[derive(Clone)]
pub struct MemoryStore {
    store: Arc<RwLock<LruCache<CacheKey, CacheEntry>>>,
    counters: Arc<Counters>,
}

impl MemoryStore {
    /// Creates a store that never evicts.
    pub fn unbounded() -> Self {
        Self {
            store: Arc::new(RwLock::new(LruCache::unbounded())),
            counters: Arc::new(Counters::default()),
        }
    }

    /// Creates a store that holds at most `max_entries` entries, evicting
    /// the least recently used entry when full.
    ///
    /// An evicted key will recompute on its next call, so bounded stores
    /// trade the compute-at-most-once guarantee for bounded memory.
    ///
    /// # Panics
    ///
    /// Panics if `max_entries` is 0.
    pub fn bounded(max_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).expect("max_entries must be > 0");
        Self {
            store: Arc::new(RwLock::new(LruCache::new(capacity))),
            counters: Arc::new(Counters::default()),
        }
    }

    /// Returns cumulative hit/miss counters and the current entry count.
    ///
    /// Counters survive [`Cache::clear`]; they describe the store's whole
    /// lifetime.
    pub async fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.counters.hits.load(Ordering::Relaxed),
            misses: self.counters.misses.load(Ordering::Relaxed),
            entries: self.store.read().await.len(),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::unbounded()
    }
}

#[async_trait]
impl Cache for MemoryStore {
    async fn get(&self, key: &CacheKey) -> Result<Option<CachedValue>> {
        // Write lock: LRU lookup updates recency.
        let mut store = self.store.write().await;

        match store.get(key) {
            Some(entry) => {
                self.counters.hits.fetch_add(1, Ordering::Relaxed);
                Ok(Some(entry.value.clone()))
            }
            None => {
                self.counters.misses.fetch_add(1, Ordering::Relaxed);
                Ok(None)
            }
        }
    }

    async fn insert(&self, key: CacheKey, value: CachedValue) -> Result<()> {
        let mut store = self.store.write().await;
        store.put(key, CacheEntry::new(value));
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let mut store = self.store.write().await;
        store.clear();
        Ok(())
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.store.read().await.len())
    }
}
