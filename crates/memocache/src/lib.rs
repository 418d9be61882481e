//! Memoize expensive computations behind an explicit, shareable cache store.
//!
//! The crate has two layers:
//!
//! - [`store`] provides cache store backends implementing the
//!   [`memocache_core::cache::Cache`] trait. The default backend is
//!   [`MemoryStore`], an in-process map that lives as long as the `Arc`
//!   holding it.
//! - [`memo`] provides [`Memo`], which wraps an async computation so that
//!   repeated calls with equal arguments return the stored result instead of
//!   recomputing. Misses run the computation at most once per key, even
//!   under concurrent callers.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use memocache::{Memo, MemoryStore};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(MemoryStore::unbounded());
//!
//! let multiply = Memo::new("multiply", store, |(a, b): (i64, i64)| async move {
//!     Ok::<_, std::convert::Infallible>(a * b)
//! });
//!
//! assert_eq!(*multiply.call((2, 3)).await?, 6); // computed
//! assert_eq!(*multiply.call((2, 3)).await?, 6); // served from the store
//! # Ok(())
//! # }
//! ```

pub mod memo;
pub mod store;

pub use memo::{memoize, Memo, MemoError};
pub use store::{CacheStats, MemoryStore};

pub use memocache_core::cache::{derive_key, Cache, CacheError, CacheKey, CachedValue};
