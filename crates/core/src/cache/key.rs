use std::fmt;

use serde::Serialize;

use super::{CacheError, Result};

/// A derived cache key.
///
/// Keys are namespaced strings of the form `{function}:{args}` where `args`
/// is the JSON encoding of the call arguments. Structurally equal arguments
/// always encode to the same bytes, so equal calls map to equal keys.
///
/// Keys for different functions never collide because the function name is
/// part of the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derives the cache key for a call to `function` with `args`.
///
/// `args` is normalized through JSON so that any `Serialize` shape (numbers,
/// strings, tuples, structs of such) can act as a key. Callers should keep
/// argument shapes deterministic: a map with unstable iteration order will
/// produce unstable keys.
///
/// # Errors
///
/// Returns [`CacheError::InvalidArgument`] if `function` is empty or the
/// arguments do not serialize (e.g. a map with non-string keys).
pub fn derive_key<A: Serialize>(function: &str, args: &A) -> Result<CacheKey> {
    if function.is_empty() {
        return Err(CacheError::InvalidArgument(
            "function name must not be empty".to_string(),
        ));
    }

    let encoded =
        serde_json::to_string(args).map_err(|e| CacheError::InvalidArgument(e.to_string()))?;

    Ok(CacheKey(format!("{function}:{encoded}")))
}
