//! Core cache types and structures

use crate::errors::LoaderError;
use crate::eviction::{EntryStore, EvictionPolicy};
use std::collections::HashMap;
use std::fmt;

/// A registered loader: a deferred computation producing one value
pub type BoxedLoader<V> = Box<dyn FnMut() -> Result<V, LoaderError>>;

/// A keyed cache that computes values lazily through per-key loaders
///
/// Values are loaded on first access, memoized, and retired by the eviction
/// policy wired in at construction. The policy cannot be swapped afterwards.
///
/// Not `Sync`/`Send`-aware: one cache serves one caller at a time, and
/// `load` runs to completion without yielding.
pub struct LoadingCache<K, V> {
    /// Loaded values
    pub(super) store: EntryStore<K, V>,
    /// Registered loaders; retained after a load so evicted keys can be
    /// reloaded
    pub(super) loaders: HashMap<K, BoxedLoader<V>>,
    /// Eviction policy, consulted before every load attempt
    pub(super) policy: Box<dyn EvictionPolicy<K, V>>,
}

impl<K, V> fmt::Debug for LoadingCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadingCache")
            .field("policy", &self.policy.name())
            .field("entries", &self.store.len())
            .field("loaders", &self.loaders.len())
            .finish()
    }
}
