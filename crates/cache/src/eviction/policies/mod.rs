//! Eviction policy implementations

mod keep_forever;
mod keep_never;
mod lru;

pub use keep_forever::KeepForever;
pub use keep_never::KeepNever;
pub use lru::Lru;
