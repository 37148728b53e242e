//! Target selection and guess acceptance
//!
//! The game only needs two things from its word lists: which word is today's
//! target, and whether a guess is an accepted word.

use super::loader::words_from_slice;
use super::{DICTIONARY, TARGETS};
use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Day 0 of the daily rotation: 2022-01-01T00:00:00Z
pub const EPOCH_UNIX_SECS: i64 = 1_640_995_200;

const SECS_PER_DAY: i64 = 24 * 60 * 60;

/// Error type for unusable word sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    NoTargets,
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTargets => write!(f, "Target word list is empty"),
        }
    }
}

impl std::error::Error for SourceError {}

/// Ordered target list plus the set of accepted guesses
#[derive(Debug, Clone)]
pub struct WordSource {
    targets: Vec<Word>,
    accepted: FxHashSet<String>,
}

impl WordSource {
    /// Build a source from a target list and a dictionary
    ///
    /// Every target is also accepted as a guess.
    ///
    /// # Errors
    /// Returns `SourceError::NoTargets` if `targets` is empty.
    pub fn new(
        targets: Vec<Word>,
        dictionary: impl IntoIterator<Item = Word>,
    ) -> Result<Self, SourceError> {
        if targets.is_empty() {
            return Err(SourceError::NoTargets);
        }

        let mut accepted: FxHashSet<String> = dictionary
            .into_iter()
            .map(|w| w.text().to_string())
            .collect();
        accepted.extend(targets.iter().map(|w| w.text().to_string()));

        Ok(Self { targets, accepted })
    }

    /// Source backed by the word lists compiled into the binary
    ///
    /// # Errors
    /// Returns `SourceError::NoTargets` if the embedded target list is empty.
    pub fn embedded() -> Result<Self, SourceError> {
        Self::new(words_from_slice(TARGETS), words_from_slice(DICTIONARY))
    }

    /// Number of whole days between the epoch and `now`
    ///
    /// Negative before the epoch.
    ///
    /// # Examples
    /// ```
    /// use std::time::{Duration, UNIX_EPOCH};
    /// use wordle_game::wordlists::{EPOCH_UNIX_SECS, WordSource};
    ///
    /// let noon_day_two = UNIX_EPOCH + Duration::from_secs(EPOCH_UNIX_SECS as u64 + 2 * 86_400 + 43_200);
    /// assert_eq!(WordSource::day_index(noon_day_two), 2);
    /// ```
    #[must_use]
    pub fn day_index(now: SystemTime) -> i64 {
        let unix_secs = match now.duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_secs() as i64,
            Err(e) => -(e.duration().as_secs() as i64),
        };
        (unix_secs - EPOCH_UNIX_SECS).div_euclid(SECS_PER_DAY)
    }

    /// Target word for a day index
    ///
    /// Days wrap around the target list in both directions.
    #[must_use]
    pub fn target_for_day(&self, day: i64) -> &Word {
        let len = self.targets.len() as i64;
        &self.targets[day.rem_euclid(len) as usize]
    }

    /// Random target for practice games
    #[must_use]
    pub fn random_target(&self) -> &Word {
        self.random_target_with(&mut rand::rng())
    }

    pub fn random_target_with<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        self.targets
            .choose(rng)
            .unwrap_or_else(|| self.target_for_day(0))
    }

    /// Whether `word` is an accepted guess
    ///
    /// Case-insensitive.
    #[must_use]
    pub fn is_valid_guess(&self, word: &str) -> bool {
        self.accepted.contains(&word.to_lowercase())
    }

    #[must_use]
    pub fn targets(&self) -> &[Word] {
        &self.targets
    }

    #[must_use]
    pub fn dictionary_len(&self) -> usize {
        self.accepted.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::time::Duration;

    fn source() -> WordSource {
        WordSource::new(
            words_from_slice(&["cigar", "rebut", "sissy"]),
            words_from_slice(&["crane", "plant"]),
        )
        .unwrap()
    }

    fn at_unix(secs: i64) -> SystemTime {
        if secs >= 0 {
            UNIX_EPOCH + Duration::from_secs(secs as u64)
        } else {
            UNIX_EPOCH - Duration::from_secs(secs.unsigned_abs())
        }
    }

    #[test]
    fn empty_targets_rejected() {
        let result = WordSource::new(Vec::new(), words_from_slice(&["crane"]));
        assert_eq!(result.unwrap_err(), SourceError::NoTargets);
    }

    #[test]
    fn targets_are_accepted_guesses() {
        let source = source();
        assert!(source.is_valid_guess("cigar"));
        assert!(source.is_valid_guess("crane"));
        assert!(source.is_valid_guess("PLANT"));
        assert!(!source.is_valid_guess("zzzzz"));
        assert_eq!(source.dictionary_len(), 5);
    }

    #[test]
    fn day_index_counts_whole_days() {
        assert_eq!(WordSource::day_index(at_unix(EPOCH_UNIX_SECS)), 0);
        assert_eq!(WordSource::day_index(at_unix(EPOCH_UNIX_SECS + SECS_PER_DAY - 1)), 0);
        assert_eq!(WordSource::day_index(at_unix(EPOCH_UNIX_SECS + SECS_PER_DAY)), 1);
        assert_eq!(WordSource::day_index(at_unix(EPOCH_UNIX_SECS - 1)), -1);
        assert!(WordSource::day_index(at_unix(-10)) < 0);
    }

    #[test]
    fn target_for_day_is_deterministic_and_wraps() {
        let source = source();
        assert_eq!(source.target_for_day(0).text(), "cigar");
        assert_eq!(source.target_for_day(2).text(), "sissy");
        assert_eq!(source.target_for_day(3).text(), "cigar");
        assert_eq!(source.target_for_day(-1).text(), "sissy");
        assert_eq!(source.target_for_day(7), source.target_for_day(7));
    }

    #[test]
    fn random_target_comes_from_targets() {
        let source = source();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let word = source.random_target_with(&mut rng);
            assert!(source.targets().contains(word));
        }
    }

    #[test]
    fn embedded_source_loads() {
        let source = WordSource::embedded().unwrap();
        assert_eq!(source.targets().len(), TARGETS.len());
        let today = WordSource::day_index(SystemTime::now());
        assert!(source.is_valid_guess(source.target_for_day(today).text()));
    }
}
