//! Best-known status of every keyboard letter

use crate::core::Evaluation;
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

/// Letter → best evaluation seen so far this session
///
/// Statuses only move up the `Wrong < WrongLocation < Correct` order.
#[derive(Debug, Clone, Default)]
pub struct KeyStatuses(FxHashMap<u8, Evaluation>);

impl KeyStatuses {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, letter: u8) -> Option<Evaluation> {
        self.0.get(&letter.to_ascii_lowercase()).copied()
    }

    /// Record a result for `letter`, keeping the better of old and new
    ///
    /// Returns `true` if the stored status changed.
    pub fn record(&mut self, letter: u8, evaluation: Evaluation) -> bool {
        match self.0.entry(letter.to_ascii_lowercase()) {
            Entry::Vacant(slot) => {
                slot.insert(evaluation);
                true
            }
            Entry::Occupied(mut slot) if evaluation > *slot.get() => {
                slot.insert(evaluation);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, Evaluation)> + '_ {
        self.0.iter().map(|(&letter, &evaluation)| (letter, evaluation))
    }
}
