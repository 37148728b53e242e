//! Formatting utilities for terminal output

use crate::core::{Evaluation, Feedback, Word};
use crate::game::{KEYBOARD_ROWS, KeyStatuses};
use colored::{ColoredString, Colorize};

/// A letter as a coloured tile
#[must_use]
pub fn colored_letter(letter: char, status: Option<Evaluation>) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match status {
        Some(Evaluation::Correct) => text.black().on_green().bold(),
        Some(Evaluation::WrongLocation) => text.black().on_yellow().bold(),
        Some(Evaluation::Wrong) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// A revealed guess as a row of coloured tiles
#[must_use]
pub fn colored_row(guess: &Word, feedback: &Feedback) -> String {
    guess
        .chars()
        .iter()
        .zip(feedback.evaluations())
        .map(|(&letter, &evaluation)| colored_letter(char::from(letter), Some(evaluation)).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The keyboard with every letter coloured by its best known status
#[must_use]
pub fn colored_keyboard(keys: &KeyStatuses) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let letters: String = row
                .bytes()
                .map(|b| colored_letter(char::from(b), keys.get(b)).to_string())
                .collect();
            format!("{}{letters}", " ".repeat(indent * 2))
        })
        .collect()
}

/// Emoji grid of a finished game, one line per guess
///
/// ```
/// use wordle_game::core::{Feedback, Word};
/// use wordle_game::output::formatters::share_grid;
///
/// let history = vec![(Word::new("crane").unwrap(), Feedback::parse("--GGG").unwrap())];
/// assert_eq!(share_grid(&history), "⬜⬜🟩🟩🟩");
/// ```
#[must_use]
pub fn share_grid(history: &[(Word, Feedback)]) -> String {
    history
        .iter()
        .map(|(_, feedback)| feedback.to_emoji())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
