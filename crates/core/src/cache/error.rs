use thiserror::Error;

/// Errors that can occur during cache operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// The call arguments could not be turned into a cache key.
    ///
    /// Raised before the wrapped computation runs, so a failed derivation
    /// never triggers a computation.
    #[error("Invalid argument for key derivation: {0}")]
    InvalidArgument(String),
    /// A stored entry does not hold the requested output type.
    #[error("Cached value type mismatch for key: {key}")]
    TypeMismatch { key: String },
    /// A backend operation failed.
    #[error("Cache operation failed: {0}")]
    OperationFailed(String),
}

/// Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
