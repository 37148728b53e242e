//! Terminal output formatting
//!
//! Coloured tiles, share grids and end-of-game summaries for line mode.

pub mod display;
pub mod formatters;

pub use display::{print_game_result, print_statistics};
