//! Cache operations: loader registration, loading, inspection

use crate::errors::{CacheError, LoaderError, RecoveryHint, Result};
use std::collections::hash_map::Entry;
use std::fmt;
use std::hash::Hash;

use super::types::LoadingCache;

impl<K, V> LoadingCache<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    /// Register the loader for `key`, replacing any previous one
    ///
    /// Does not touch the entry store: a value already cached for `key`
    /// stays as it is, and the new loader only runs once that value has
    /// been evicted.
    pub fn set<F>(&mut self, key: K, loader: F)
    where
        F: FnMut() -> std::result::Result<V, LoaderError> + 'static,
    {
        self.loaders.insert(key, Box::new(loader));
    }

    /// Return the value for `key`, loading it on a miss
    ///
    /// Runs the eviction policy first, then either returns the cached
    /// value (hit) or invokes the registered loader exactly once and caches
    /// its result (miss). A loader failure leaves no entry behind, so the
    /// next `load` retries.
    ///
    /// The returned reference borrows the cache mutably, so it must be
    /// dropped (or cloned out, see [`load_owned`]) before the next `load`
    /// or `set` call.
    ///
    /// # Errors
    ///
    /// - [`CacheError::LoaderMissing`] if no loader was registered for `key`
    /// - [`CacheError::Loader`] if the loader itself failed
    ///
    /// [`load_owned`]: LoadingCache::load_owned
    pub fn load(&mut self, key: &K) -> Result<&V> {
        self.policy.evict(key, &mut self.store);

        match self.store.entry(key.clone()) {
            Entry::Occupied(entry) => {
                tracing::trace!(key = ?key, "cache hit");
                Ok(&*entry.into_mut())
            }
            Entry::Vacant(slot) => {
                let loader = match self.loaders.get_mut(key) {
                    Some(loader) => loader,
                    None => {
                        return Err(CacheError::LoaderMissing {
                            key: format!("{key:?}"),
                            recovery_hint: RecoveryHint::Manual {
                                instructions: "register a loader with set() before loading"
                                    .to_string(),
                            },
                        });
                    }
                };
                let value = match loader() {
                    Ok(value) => value,
                    Err(source) => {
                        return Err(CacheError::Loader {
                            key: format!("{key:?}"),
                            source,
                            recovery_hint: RecoveryHint::Retry,
                        });
                    }
                };
                tracing::trace!(key = ?key, "cache miss, loader invoked");
                Ok(&*slot.insert(value))
            }
        }
    }

    /// Like [`load`], but hands back an owned clone of the value
    ///
    /// For callers that need the value to stay valid across later cache
    /// calls.
    ///
    /// [`load`]: LoadingCache::load
    pub fn load_owned(&mut self, key: &K) -> Result<V>
    where
        V: Clone,
    {
        self.load(key).cloned()
    }
}

impl<K, V> LoadingCache<K, V>
where
    K: Eq + Hash,
{
    /// Whether a value is currently cached for `key`
    ///
    /// Pure inspection: does not run the eviction policy and does not
    /// refresh the key's recency.
    pub fn contains(&self, key: &K) -> bool {
        self.store.contains_key(key)
    }

    /// Number of values currently cached
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the entry store is empty
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Name of the eviction policy wired in at construction
    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }
}
