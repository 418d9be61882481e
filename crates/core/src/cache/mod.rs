mod error;
mod key;
mod traits;
mod value;

pub use error::{CacheError, Result};
pub use key::{derive_key, CacheKey};
pub use traits::Cache;
pub use value::{downcast_value, CachedValue};
