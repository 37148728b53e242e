//! Raw input → game actions
//!
//! Front ends translate their native events into [`InputEvent`]s and hand
//! them to [`Game::dispatch`](super::Game::dispatch). Anything that does not
//! map to an [`Action`] is ignored.

/// Identifier of an on-screen keyboard key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyId {
    Letter(char),
    Enter,
    Delete,
}

impl KeyId {
    /// Text shown on the key
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Letter(c) => c.to_ascii_uppercase().to_string(),
            Self::Enter => "ENTER".to_string(),
            Self::Delete => "⌫".to_string(),
        }
    }
}

/// Letter rows of the on-screen keyboard
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// On-screen keyboard, top row first
///
/// Enter and Delete flank the bottom letter row.
#[must_use]
pub fn keyboard_layout() -> Vec<Vec<KeyId>> {
    let mut rows: Vec<Vec<KeyId>> = KEYBOARD_ROWS
        .iter()
        .map(|row| row.chars().map(KeyId::Letter).collect())
        .collect();

    if let Some(last) = rows.last_mut() {
        last.insert(0, KeyId::Enter);
        last.push(KeyId::Delete);
    }
    rows
}

/// Input delivered by a front end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Physical character key
    Char(char),
    Enter,
    Backspace,
    /// Pointer tap on an on-screen key
    Click(KeyId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Lowercase ASCII letter
    TypeLetter(u8),
    Delete,
    Submit,
}

impl InputEvent {
    /// Map to a game action; only single ASCII letters type
    ///
    /// ```
    /// use wordle_game::game::{Action, InputEvent, KeyId};
    ///
    /// assert_eq!(InputEvent::Char('Q').action(), Some(Action::TypeLetter(b'q')));
    /// assert_eq!(InputEvent::Click(KeyId::Delete).action(), Some(Action::Delete));
    /// assert_eq!(InputEvent::Char('7').action(), None);
    /// ```
    #[must_use]
    pub fn action(self) -> Option<Action> {
        match self {
            Self::Char(c) | Self::Click(KeyId::Letter(c)) => letter_action(c),
            Self::Enter | Self::Click(KeyId::Enter) => Some(Action::Submit),
            Self::Backspace | Self::Click(KeyId::Delete) => Some(Action::Delete),
        }
    }
}

fn letter_action(c: char) -> Option<Action> {
    c.is_ascii_alphabetic()
        .then(|| Action::TypeLetter(c.to_ascii_lowercase() as u8))
}
