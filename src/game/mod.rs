//! The game engine
//!
//! Input capture, validation, the animated reveal and win/loss detection,
//! all driven by an explicit clock so sessions are deterministic and testable
//! without a terminal.

mod animation;
mod board;
mod config;
mod events;
mod input;
mod keys;
mod lock;
mod notify;
mod schedule;
mod session;

pub use animation::{AnimationKind, AnimationSequencer};
pub use board::{Board, Cell, CellState, Position, Row};
pub use config::{
    DANCE_DURATION_MS, DEFAULT_MAX_ATTEMPTS, FLIP_DURATION_MS, GameConfig, MAX_ATTEMPTS,
    SHAKE_DURATION_MS,
};
pub use events::GameEvent;
pub use input::{Action, InputEvent, KEYBOARD_ROWS, KeyId, keyboard_layout};
pub use keys::KeyStatuses;
pub use lock::{InteractionLock, LockState};
pub use notify::{Notification, NotificationPresenter};
pub use schedule::Scheduler;
pub use session::{Game, GameOutcome, GuessError, Submission, WIN_MESSAGE};
