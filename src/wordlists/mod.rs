//! Word lists for the daily game
//!
//! Embedded lists compiled into the binary, loaders for custom lists, and the
//! [`WordSource`] the game draws its target and dictionary from.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, TARGETS, TARGETS_COUNT};
pub use source::{EPOCH_UNIX_SECS, SourceError, WordSource};
