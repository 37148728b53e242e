//! Presentation events
//!
//! The game never draws anything. It queues these events for whatever front
//! end is attached; the front end may also re-derive everything from the
//! game's read accessors.

use super::animation::AnimationKind;
use super::board::{CellState, Position};
use super::session::GameOutcome;
use crate::core::Evaluation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    TileChanged {
        position: Position,
        letter: Option<char>,
        state: CellState,
    },
    KeyChanged {
        letter: char,
        status: Evaluation,
    },
    Notify {
        id: u64,
        message: String,
        duration_ms: u64,
    },
    NotificationDismissed {
        id: u64,
    },
    LockChanged {
        listening: bool,
    },
    AnimationStarted {
        kind: AnimationKind,
        position: Position,
    },
    AnimationFinished {
        kind: AnimationKind,
        position: Position,
    },
    OutcomeChanged(GameOutcome),
    /// A new game replaced all previous state
    Reset,
}
