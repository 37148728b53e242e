//! Wordle Game
//!
//! A deterministic Wordle engine with a terminal front end. The engine runs on
//! an explicit millisecond clock, so tile flips, shakes, dances and alerts are
//! all plain data that the caller advances.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_game::game::{Game, GameConfig, GameOutcome, InputEvent};
//! use wordle_game::wordlists::WordSource;
//!
//! let source = WordSource::embedded().unwrap();
//! let mut game = Game::for_day(&source, 0, GameConfig::default());
//!
//! for c in "crane".chars() {
//!     game.dispatch(InputEvent::Char(c));
//! }
//! game.dispatch(InputEvent::Enter);
//!
//! // Play out the reveal
//! game.run_until_idle();
//! assert_eq!(game.attempts(), 1);
//! println!("{:?}", game.outcome() == GameOutcome::Won);
//! ```

// Core domain types
pub mod core;

// Game engine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
