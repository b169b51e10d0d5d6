//! Cache construction

use crate::config::CacheConfig;
use crate::errors::Result;
use crate::eviction::{create_eviction_policy, EvictionPolicy, KeepForever, KeepNever, Lru};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use super::types::LoadingCache;

impl<K, V> LoadingCache<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug + 'static,
    V: 'static,
{
    fn with_policy(policy: Box<dyn EvictionPolicy<K, V>>) -> Self {
        tracing::debug!(policy = policy.name(), "created loading cache");
        Self {
            store: HashMap::new(),
            loaders: HashMap::new(),
            policy,
        }
    }

    /// Create a cache that never evicts
    pub fn keep_forever() -> Self {
        Self::with_policy(Box::new(KeepForever))
    }

    /// Create a cache that recomputes on every load
    pub fn keep_never() -> Self {
        Self::with_policy(Box::new(KeepNever))
    }

    /// Create a cache that keeps the `capacity` most recently used entries
    ///
    /// Fails with a configuration error for a zero capacity.
    pub fn least_recently_used(capacity: usize) -> Result<Self> {
        Ok(Self::with_policy(Box::new(Lru::new(capacity)?)))
    }

    /// Create a cache with the eviction policy selected by `config`
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_policy(create_eviction_policy(&config.eviction)?))
    }
}
