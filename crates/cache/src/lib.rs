//! Loading cache for loadstone
//!
//! This crate provides a keyed cache that computes values lazily:
//! - Per-key loaders registered up front and invoked on demand
//! - Memoization of loaded values
//! - Pluggable eviction policies (keep-forever, keep-never, bounded LRU)
//! - Configuration-driven construction
//!
//! The cache is single-threaded by design: `load` runs the whole
//! evict-then-hit-or-miss sequence to completion before returning, and the
//! returned reference is tied to the cache borrow, so it cannot outlive the
//! next mutating call.

pub mod config;
pub mod core;
pub mod errors;
pub mod eviction;

// Re-export main types and traits selectively to avoid conflicts
pub use config::{CacheConfig, EvictionConfig};
pub use core::LoadingCache;
pub use errors::{CacheError, Error, LoaderError, RecoveryHint, Result};
pub use eviction::{EntryStore, EvictionPolicy, KeepForever, KeepNever, Lru};
