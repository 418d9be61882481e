//! Core contracts for the memocache project.
//!
//! This crate defines the cache contract shared by every backend and by the
//! memoizer in the `memocache` crate: key derivation, the [`cache::Cache`]
//! trait, the stored-value representation, and the error types. It holds no
//! runtime state and no backend code.

pub mod cache;
