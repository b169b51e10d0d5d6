//! LRU (Least Recently Used) eviction policy implementation

use crate::config::DEFAULT_LRU_CAPACITY;
use crate::errors::{CacheError, RecoveryHint, Result};
use crate::eviction::traits::{EntryStore, EvictionPolicy};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::Hash;

/// LRU (Least Recently Used) eviction policy with a fixed capacity
///
/// Recency is tracked with a bidirectional index: a per-key stamp map and
/// an ordered stamp-to-key map, driven by a monotonically increasing clock.
/// Stamps are unique, so there are no ties when picking a victim. Both
/// halves of the index always have the same cardinality, bounded by the
/// configured capacity.
pub struct Lru<K> {
    /// Stamp assigned to each tracked key
    stamps: HashMap<K, u64>,
    /// Tracked keys in staleness order; the first entry is the victim
    order: BTreeMap<u64, K>,
    /// Next stamp to hand out
    clock: u64,
    /// Maximum number of keys tracked
    capacity: usize,
}

impl<K> Lru<K> {
    /// Create an LRU policy tracking at most `capacity` keys
    ///
    /// Fails with a configuration error for a zero capacity.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::Configuration {
                message: "least-recently-used eviction requires capacity >= 1".to_string(),
                recovery_hint: RecoveryHint::UseDefault {
                    value: DEFAULT_LRU_CAPACITY.to_string(),
                },
            });
        }
        Ok(Self {
            stamps: HashMap::with_capacity(capacity),
            order: BTreeMap::new(),
            clock: 0,
            capacity,
        })
    }

    /// Maximum number of keys this policy tracks
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of keys currently tracked
    pub fn tracked(&self) -> usize {
        self.stamps.len()
    }
}

impl<K> fmt::Debug for Lru<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lru")
            .field("capacity", &self.capacity)
            .field("tracked", &self.stamps.len())
            .field("clock", &self.clock)
            .finish()
    }
}

impl<K, V> EvictionPolicy<K, V> for Lru<K>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    fn name(&self) -> &'static str {
        "least-recently-used"
    }

    fn evict(&mut self, key: &K, store: &mut EntryStore<K, V>) {
        if let Some(stamp) = self.stamps.remove(key) {
            // Already tracked: the re-insertion below supersedes the old
            // stamp. The entry stays in the store; this is a hit.
            self.order.remove(&stamp);
        } else if self.stamps.len() >= self.capacity {
            // Index full and the key is new: retire the stalest entry from
            // the store and from both halves of the index.
            if let Some((_, victim)) = self.order.pop_first() {
                self.stamps.remove(&victim);
                store.remove(&victim);
                tracing::debug!(victim = ?victim, incoming = ?key, "evicted least recently used entry");
            }
        }

        self.stamps.insert(key.clone(), self.clock);
        self.order.insert(self.clock, key.clone());
        self.clock += 1;

        debug_assert_eq!(self.stamps.len(), self.order.len());
        debug_assert!(self.stamps.len() <= self.capacity);
    }
}
