//! Core domain types for the guessing game
//!
//! Pure value types with no knowledge of the board, timers or rendering:
//! words, per-letter evaluations and the two-pass guess evaluator.

mod feedback;
mod word;

pub use feedback::{Evaluation, Feedback};
pub use word::{Word, WordError};

/// Number of letters in every guess and target
pub const WORD_LENGTH: usize = 5;
