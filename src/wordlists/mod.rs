//! Word lists for secrets, hints, and guess validation
//!
//! The curated list is embedded in the binary; larger allow-lists are loaded
//! from disk on demand.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
