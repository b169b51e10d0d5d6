//! Core error types for the loading cache

/// Result type for cache operations
pub type Result<T> = std::result::Result<T, CacheError>;

/// Re-export `CacheError` as `Error` for callers that alias it
pub use CacheError as Error;

/// Error type a loader may fail with
pub type LoaderError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error type for cache operations
#[derive(Debug)]
pub enum CacheError {
    /// `load` was called for a key that has no registered loader
    LoaderMissing {
        key: String,
        recovery_hint: RecoveryHint,
    },

    /// The registered loader failed; nothing was cached for the key
    Loader {
        key: String,
        source: LoaderError,
        recovery_hint: RecoveryHint,
    },

    /// Invalid cache configuration
    Configuration {
        message: String,
        recovery_hint: RecoveryHint,
    },
}

/// Suggested recovery action for an error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecoveryHint {
    /// The operation may succeed if retried as-is
    Retry,

    /// Use the given default value instead
    UseDefault { value: String },

    /// Manual intervention required
    Manual { instructions: String },
}
