//! Guess evaluation
//!
//! Feedback for a guess is one [`Evaluation`] per position:
//! - `Wrong` = letter not in the target (or all its occurrences already credited)
//! - `WrongLocation` = letter in the target, different position
//! - `Correct` = letter in the correct position
//!
//! Evaluations are ordered by precedence (`Wrong < WrongLocation < Correct`),
//! which is what the keyboard status map relies on to never downgrade a key.

use super::{WORD_LENGTH, Word};
use std::fmt;

/// Result for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Evaluation {
    Wrong,
    WrongLocation,
    Correct,
}

impl Evaluation {
    /// Share-grid square for this result
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::WrongLocation => '🟨',
            Self::Wrong => '⬜',
        }
    }

    /// Stable kebab-case name, as used by presentation layers
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::WrongLocation => "wrong-location",
            Self::Wrong => "wrong",
        }
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-position feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Evaluation; WORD_LENGTH]);

impl Feedback {
    /// All correct
    pub const PERFECT: Self = Self([Evaluation::Correct; WORD_LENGTH]);

    #[must_use]
    pub const fn new(evaluations: [Evaluation; WORD_LENGTH]) -> Self {
        Self(evaluations)
    }

    /// Evaluate `guess` against `target`
    ///
    /// Duplicate letters are handled with two passes over a consumable multiset
    /// of the target's letters:
    /// 1. Exact position matches are marked correct and consume their letter
    /// 2. Remaining positions are marked wrong-location while the letter still
    ///    has unconsumed occurrences, wrong otherwise
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Evaluation, Feedback, Word};
    ///
    /// let guess = Word::new("aabbb").unwrap();
    /// let target = Word::new("abcde").unwrap();
    /// let feedback = Feedback::calculate(&guess, &target);
    ///
    /// assert_eq!(
    ///     feedback.evaluations(),
    ///     &[
    ///         Evaluation::Correct,
    ///         Evaluation::Wrong,
    ///         Evaluation::WrongLocation,
    ///         Evaluation::Wrong,
    ///         Evaluation::Wrong,
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut result = [None; WORD_LENGTH];
        let mut target_available = target.char_counts();

        // First pass: exact position matches
        for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
            if g == t {
                result[i] = Some(Evaluation::Correct);
                if let Some(count) = target_available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: present elsewhere, while occurrences remain
        let mut evaluations = [Evaluation::Wrong; WORD_LENGTH];
        for (i, &letter) in guess.chars().iter().enumerate() {
            evaluations[i] = match result[i] {
                Some(done) => done,
                None => match target_available.get_mut(&letter) {
                    Some(count) if *count > 0 => {
                        *count -= 1;
                        Evaluation::WrongLocation
                    }
                    _ => Evaluation::Wrong,
                },
            };
        }

        Self(evaluations)
    }

    #[inline]
    #[must_use]
    pub const fn evaluations(&self) -> &[Evaluation; WORD_LENGTH] {
        &self.0
    }

    /// Result at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn at(&self, position: usize) -> Evaluation {
        self.0[position]
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Parse feedback from a string like "GY-G-" or "🟩🟨⬜🟩⬜"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for wrong location
    /// - '-'/'_'/⬜ for wrong
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LENGTH {
            return None;
        }

        let mut evaluations = [Evaluation::Wrong; WORD_LENGTH];
        for (slot, ch) in evaluations.iter_mut().zip(chars) {
            *slot = match ch {
                'G' | 'g' | '🟩' => Evaluation::Correct,
                'Y' | 'y' | '🟨' => Evaluation::WrongLocation,
                '-' | '_' | '⬜' => Evaluation::Wrong,
                _ => return None,
            };
        }

        Some(Self(evaluations))
    }

    /// Convert feedback to an emoji row like "🟩🟨⬜🟩⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|e| e.emoji()).collect()
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}
