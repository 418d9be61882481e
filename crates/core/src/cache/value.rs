use std::any::Any;
use std::sync::Arc;

use super::{CacheError, CacheKey, Result};

/// A stored computation result.
///
/// Results are type-erased so one store can hold the outputs of many
/// differently-typed computations. Values are immutable once stored; the
/// store only ever hands out clones of the `Arc`.
pub type CachedValue = Arc<dyn Any + Send + Sync>;

/// Recovers the concrete result type from a stored value.
///
/// # Errors
///
/// Returns [`CacheError::TypeMismatch`] if the entry under `key` was stored
/// with a different output type. Keys are namespaced per function, so this
/// only happens when two differently-typed computations share a name and a
/// store.
pub fn downcast_value<T: Send + Sync + 'static>(
    key: &CacheKey,
    value: CachedValue,
) -> Result<Arc<T>> {
    value.downcast::<T>().map_err(|_| CacheError::TypeMismatch {
        key: key.to_string(),
    })
}
