//! Core eviction policy trait definition

use std::collections::HashMap;
use std::fmt;

/// The key/value store a policy may evict from
///
/// Policies receive the store only for the duration of one [`evict`] call;
/// the borrow ends when the call returns.
///
/// [`evict`]: EvictionPolicy::evict
pub type EntryStore<K, V> = HashMap<K, V>;

/// Eviction policy trait
///
/// [`evict`] is invoked before every load attempt, with the key about to be
/// looked up and mutable access to the entry store. It has side effects
/// only: it may remove zero or more entries to make room for the incoming
/// key. Entries left in the store after the call count as cache hits.
///
/// [`evict`]: EvictionPolicy::evict
pub trait EvictionPolicy<K, V>: fmt::Debug {
    /// Policy name for logs and debug output
    fn name(&self) -> &'static str;

    /// Possibly evict entries from `store` before `key` is loaded
    fn evict(&mut self, key: &K, store: &mut EntryStore<K, V>);
}
