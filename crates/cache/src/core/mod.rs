//! The loading cache itself
//!
//! Owns the entry store and the loader registry, and orchestrates the
//! evict-then-hit-or-miss sequence on every load.

mod builder;
mod operations;
mod types;

// Re-export the main cache type
pub use types::{BoxedLoader, LoadingCache};

#[cfg(test)]
mod tests;
