//! Eviction policies for the loading cache
//!
//! A policy runs immediately before every load attempt and may remove
//! entries from the store to enforce its retention rule.

mod factory;
mod policies;
mod traits;

// Re-export public API
pub use factory::create_eviction_policy;
pub use policies::{KeepForever, KeepNever, Lru};
pub use traits::{EntryStore, EvictionPolicy};
