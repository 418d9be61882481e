//! Cache store backends.
//!
//! This module provides concrete implementations of the
//! [`memocache_core::cache::Cache`] trait. Currently the only backend is the
//! in-memory store; the memoizer only depends on the trait, so further
//! backends slot in without touching the call path.

pub mod memory;

pub use memory::{CacheStats, MemoryStore};
