//! Error handling for the loading cache
//!
//! Errors carry enough context to act on: the offending key where there is
//! one, the loader's own error where it failed, and a recovery hint.

mod display;
mod recovery;
mod types;

pub use types::*;
