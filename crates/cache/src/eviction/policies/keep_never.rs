//! Keep-never eviction policy implementation

use crate::eviction::traits::{EntryStore, EvictionPolicy};

/// Eviction policy that always evicts
///
/// Clears the whole entry store before every load, regardless of which key
/// is being loaded, so every load recomputes through its loader.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeepNever;

impl<K, V> EvictionPolicy<K, V> for KeepNever {
    fn name(&self) -> &'static str {
        "keep-never"
    }

    fn evict(&mut self, _key: &K, store: &mut EntryStore<K, V>) {
        let dropped = store.len();
        store.clear();
        if dropped > 0 {
            tracing::debug!(dropped, "cleared entry store");
        }
    }
}
