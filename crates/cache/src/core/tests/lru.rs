//! LRU cache behavior tests

use crate::core::LoadingCache;
use crate::errors::LoaderError;
use std::cell::Cell;
use std::rc::Rc;

/// Loader returning `value`, counting its invocations in `calls`
fn counting_loader(
    value: &str,
    calls: &Rc<Cell<usize>>,
) -> impl FnMut() -> Result<String, LoaderError> {
    let value = value.to_string();
    let calls = Rc::clone(calls);
    move || {
        calls.set(calls.get() + 1);
        Ok(value.clone())
    }
}

#[test]
fn capacity_bound_evicts_the_oldest_key() {
    let mut cache = LoadingCache::least_recently_used(2).unwrap();
    for key in 1u32..=3 {
        cache.set(key, move || Ok(key.to_string()));
    }

    cache.load_owned(&1).unwrap();
    cache.load_owned(&2).unwrap();
    cache.load_owned(&3).unwrap();

    assert!(!cache.contains(&1));
    assert!(cache.contains(&2));
    assert!(cache.contains(&3));
    assert_eq!(cache.len(), 2);
}

#[test]
fn reloading_a_key_refreshes_its_recency() {
    let mut cache = LoadingCache::least_recently_used(2).unwrap();
    for key in 1u32..=3 {
        cache.set(key, move || Ok(key.to_string()));
    }

    cache.load_owned(&1).unwrap();
    cache.load_owned(&2).unwrap();
    // Key 1 was the oldest; touching it makes key 2 the eviction candidate
    cache.load_owned(&1).unwrap();
    cache.load_owned(&3).unwrap();

    assert!(cache.contains(&1));
    assert!(!cache.contains(&2));
    assert!(cache.contains(&3));
}

#[test]
fn capacity_two_hit_and_miss_sequence() {
    let mut cache = LoadingCache::least_recently_used(2).unwrap();
    let calls_1 = Rc::new(Cell::new(0));
    let calls_2 = Rc::new(Cell::new(0));
    let calls_3 = Rc::new(Cell::new(0));
    cache.set(1, counting_loader("asdf", &calls_1));
    cache.set(2, counting_loader("fdsa", &calls_2));
    cache.set(3, counting_loader("1234", &calls_3));

    let misses = || calls_1.get() + calls_2.get() + calls_3.get();

    assert_eq!(cache.load(&1).unwrap(), "asdf");
    assert_eq!(misses(), 1);
    assert_eq!(cache.load(&1).unwrap(), "asdf");
    assert_eq!(misses(), 1);

    assert_eq!(cache.load(&2).unwrap(), "fdsa");
    assert_eq!(misses(), 2);
    assert_eq!(cache.load(&2).unwrap(), "fdsa");
    assert_eq!(misses(), 2);

    // Key 1 is still cached; touching it leaves key 2 as the oldest
    assert_eq!(cache.load(&1).unwrap(), "asdf");
    assert_eq!(misses(), 2);

    // Key 3 evicts key 2
    assert_eq!(cache.load(&3).unwrap(), "1234");
    assert_eq!(misses(), 3);
    assert!(!cache.contains(&2));
    assert_eq!(cache.load(&3).unwrap(), "1234");
    assert_eq!(misses(), 3);

    assert_eq!(cache.load(&1).unwrap(), "asdf");
    assert_eq!(misses(), 3);

    // Key 2 was evicted above, so this is a fresh miss
    assert_eq!(cache.load(&2).unwrap(), "fdsa");
    assert_eq!(misses(), 4);
    assert_eq!(calls_2.get(), 2);
}

#[test]
fn evicted_keys_reload_through_their_retained_loader() {
    let mut cache = LoadingCache::least_recently_used(1).unwrap();
    let calls = Rc::new(Cell::new(0));
    cache.set(1, counting_loader("asdf", &calls));
    cache.set(2, || Ok("fdsa".to_string()));

    cache.load_owned(&1).unwrap();
    cache.load_owned(&2).unwrap();
    assert!(!cache.contains(&1));

    // The loader registry kept key 1's loader across the eviction
    assert_eq!(cache.load(&1).unwrap(), "asdf");
    assert_eq!(calls.get(), 2);
}
