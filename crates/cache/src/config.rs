//! Cache configuration with validation

use crate::errors::{CacheError, RecoveryHint, Result};
use serde::{Deserialize, Serialize};

/// Default LRU capacity used when no explicit configuration is given
pub const DEFAULT_LRU_CAPACITY: usize = 1024;

/// Eviction policy selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "kebab-case")]
pub enum EvictionConfig {
    /// Never evict; the entry store grows without bound
    KeepForever,
    /// Clear the whole entry store before every load
    KeepNever,
    /// Evict the least recently used entry once `capacity` keys are tracked
    LeastRecentlyUsed { capacity: usize },
}

impl EvictionConfig {
    /// Validate the configuration
    ///
    /// Least-recently-used eviction requires a capacity of at least one
    /// entry; a zero capacity would evict on every load from an index that
    /// can never fill.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::LeastRecentlyUsed { capacity: 0 } => Err(CacheError::Configuration {
                message: "least-recently-used eviction requires capacity >= 1".to_string(),
                recovery_hint: RecoveryHint::UseDefault {
                    value: DEFAULT_LRU_CAPACITY.to_string(),
                },
            }),
            _ => Ok(()),
        }
    }
}

impl Default for EvictionConfig {
    fn default() -> Self {
        Self::LeastRecentlyUsed {
            capacity: DEFAULT_LRU_CAPACITY,
        }
    }
}

/// Configuration for a loading cache
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Eviction policy to wire into the cache at construction
    #[serde(default)]
    pub eviction: EvictionConfig,
}

impl CacheConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.eviction.validate()
    }
}
