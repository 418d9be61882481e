//! Memoizer over a cache store.
//!
//! [`Memo`] wraps an async computation with the cache-aside pattern: check
//! the store first, on miss run the computation once and populate the store.
//! Unlike a plain cache-aside read path, misses are serialized per key, so
//! concurrent callers with equal arguments cannot race into duplicate
//! computations.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use serde::Serialize;
use thiserror::Error;
use tokio::sync::Mutex;

use memocache_core::cache::{
    derive_key, downcast_value, Cache, CacheError, CacheKey, CachedValue,
};

/// Errors from a memoized call.
#[derive(Debug, Error)]
pub enum MemoError<E> {
    /// Key derivation, store access, or stored-type recovery failed.
    #[error(transparent)]
    Cache(#[from] CacheError),
    /// The wrapped computation failed.
    ///
    /// Nothing is stored for the key, so the next call with the same
    /// arguments retries the computation.
    #[error("Computation failed: {0}")]
    Compute(E),
}

type ComputeFn<A, T, E> = Box<dyn Fn(A) -> BoxFuture<'static, Result<T, E>> + Send + Sync>;

/// A memoized async computation.
///
/// Wraps a function `f: A -> Result<T, E>` together with a name (the
/// function's cache identity) and a shared store. [`Memo::call`] returns the
/// stored result for arguments it has seen before and invokes `f` at most
/// once per distinct argument value, even under concurrent callers.
///
/// Per key, the lifecycle is unseen, then computed, and computed is
/// terminal: there is no invalidation path. Dropping or clearing the store
/// is the only way to forget results.
///
/// Several `Memo`s can share one store; their names keep their keys apart.
/// Two memos sharing both a name and a store must agree on the output type,
/// otherwise calls fail with [`CacheError::TypeMismatch`].
pub struct Memo<A, T, E> {
    name: String,
    store: Arc<dyn Cache>,
    /// In-flight miss computations, one lock per key. An entry is retired
    /// only after a successful insert; failed or cancelled computations
    /// leave it in place so every later caller queues on the same lock.
    flights: Mutex<HashMap<CacheKey, Arc<Mutex<()>>>>,
    compute: ComputeFn<A, T, E>,
}

impl<A, T, E> Memo<A, T, E>
where
    A: Serialize,
    T: Send + Sync + 'static,
{
    /// Wraps `f` as a memoized computation named `name`, backed by `store`.
    ///
    /// # Arguments
    ///
    /// * `name` - Cache identity of the computation; part of every derived key
    /// * `store` - The store that holds computed results
    /// * `f` - The computation to memoize
    pub fn new<F, Fut>(name: impl Into<String>, store: Arc<dyn Cache>, f: F) -> Self
    where
        F: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        Self {
            name: name.into(),
            store,
            flights: Mutex::new(HashMap::new()),
            compute: Box::new(move |args| Box::pin(f(args))),
        }
    }

    /// Returns the computation's cache identity.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Calls the computation through the cache.
    ///
    /// On a hit the stored result is returned without invoking the wrapped
    /// function. On a miss the function runs, its result is stored, and the
    /// same `Arc` is returned. A failed computation propagates as
    /// [`MemoError::Compute`] and stores nothing.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidArgument`] (before invoking the
    /// function) if `args` cannot be turned into a key.
    pub async fn call(&self, args: A) -> Result<Arc<T>, MemoError<E>> {
        let key = derive_key(&self.name, &args)?;

        if let Some(value) = self.store.get(&key).await? {
            tracing::trace!(function = %self.name, key = %key, "Cache hit");
            return Ok(downcast_value(&key, value)?);
        }

        // Serialize miss computation per key: concurrent callers with equal
        // arguments queue on the same flight lock.
        let flight = {
            let mut flights = self.flights.lock().await;
            flights.entry(key.clone()).or_default().clone()
        };
        let _guard = flight.lock().await;

        // Another caller may have computed while we waited for the lock.
        if let Some(value) = self.store.get(&key).await? {
            tracing::trace!(function = %self.name, key = %key, "Cache hit after wait");
            return Ok(downcast_value(&key, value)?);
        }

        tracing::debug!(function = %self.name, key = %key, "Cache miss");
        match (self.compute)(args).await {
            Ok(value) => {
                let value = Arc::new(value);
                let stored: CachedValue = value.clone();
                // Populate the store before retiring the flight entry, so a
                // fresh caller either sees the entry or queues behind us.
                let inserted = self.store.insert(key.clone(), stored).await;
                self.finish_flight(&key).await;
                inserted?;
                Ok(value)
            }
            Err(err) => {
                // Nothing stored, and the flight entry stays in the table:
                // the next call with these arguments recomputes, and all
                // callers for this key keep queueing on the same lock until
                // a computation succeeds.
                Err(MemoError::Compute(err))
            }
        }
    }

    /// Retires a key's flight entry. Only called once the store holds the
    /// key, so a caller that finds no entry afterwards hits the store on
    /// its re-check instead of computing.
    async fn finish_flight(&self, key: &CacheKey) {
        self.flights.lock().await.remove(key);
    }
}

/// Wraps `f` as a memoized computation.
///
/// Free-function form of [`Memo::new`] for call sites that prefer
/// `memoize("name", store, f)` over constructing the type directly.
pub fn memoize<A, T, E, F, Fut>(
    name: impl Into<String>,
    store: Arc<dyn Cache>,
    f: F,
) -> Memo<A, T, E>
where
    A: Serialize,
    T: Send + Sync + 'static,
    F: Fn(A) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T, E>> + Send + 'static,
{
    Memo::new(name, store, f)
}
