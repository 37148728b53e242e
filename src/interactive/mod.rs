//! Interactive full-screen terminal front end
//!
//! Keyboard and mouse input go to the game engine; the board, on-screen
//! keyboard and notifications are redrawn from engine state every frame.

mod app;
mod rendering;

pub use app::{App, GameMode, Statistics, run_tui};
pub use rendering::evaluation_color;
