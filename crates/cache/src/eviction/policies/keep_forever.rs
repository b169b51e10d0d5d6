//! Keep-forever eviction policy implementation

use crate::eviction::traits::{EntryStore, EvictionPolicy};

/// Eviction policy that never evicts
///
/// Every loaded value stays cached for the lifetime of the cache, so the
/// entry store grows without bound.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeepForever;

impl<K, V> EvictionPolicy<K, V> for KeepForever {
    fn name(&self) -> &'static str {
        "keep-forever"
    }

    fn evict(&mut self, _key: &K, _store: &mut EntryStore<K, V>) {}
}
