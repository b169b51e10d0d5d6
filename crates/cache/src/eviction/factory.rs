//! Factory for creating eviction policies

use crate::config::EvictionConfig;
use crate::errors::Result;
use std::fmt;
use std::hash::Hash;

use super::policies::{KeepForever, KeepNever, Lru};
use super::traits::EvictionPolicy;

/// Build the eviction policy selected by `config`
///
/// Fails with a configuration error when the selection is invalid, such as
/// a zero LRU capacity.
pub fn create_eviction_policy<K, V>(config: &EvictionConfig) -> Result<Box<dyn EvictionPolicy<K, V>>>
where
    K: Eq + Hash + Clone + fmt::Debug + 'static,
    V: 'static,
{
    match config {
        EvictionConfig::KeepForever => Ok(Box::new(KeepForever)),
        EvictionConfig::KeepNever => Ok(Box::new(KeepNever)),
        EvictionConfig::LeastRecentlyUsed { capacity } => Ok(Box::new(Lru::new(*capacity)?)),
    }
}
