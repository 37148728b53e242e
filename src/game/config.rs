//! Timing and size settings for a game session

/// Default number of guesses before the game is lost
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Most guesses a board can hold
pub const MAX_ATTEMPTS: usize = 12;

/// Full tile flip (out and back) in milliseconds
pub const FLIP_DURATION_MS: u64 = 500;

/// Single tile dance in milliseconds
pub const DANCE_DURATION_MS: u64 = FLIP_DURATION_MS;

/// Invalid-guess shake in milliseconds
pub const SHAKE_DURATION_MS: u64 = 250;

/// Settings for a [`Game`](super::Game)
///
/// All durations are in milliseconds of the game clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Clamped to `1..=MAX_ATTEMPTS` when a game starts
    pub max_attempts: usize,
    pub flip_duration_ms: u64,
    pub dance_duration_ms: u64,
    pub shake_duration_ms: u64,
    /// How long "Not enough letters" / "Not in word list" stay up
    pub alert_duration_ms: u64,
    pub win_alert_duration_ms: u64,
    /// How long the revealed target stays up after a loss
    pub loss_alert_duration_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            flip_duration_ms: FLIP_DURATION_MS,
            dance_duration_ms: DANCE_DURATION_MS,
            shake_duration_ms: SHAKE_DURATION_MS,
            alert_duration_ms: 1_000,
            win_alert_duration_ms: 5_000,
            loss_alert_duration_ms: 10_000,
        }
    }
}

impl GameConfig {
    /// Delay between consecutive tile flips, and the length of each half flip
    #[must_use]
    pub const fn flip_stagger_ms(&self) -> u64 {
        self.flip_duration_ms / 2
    }

    /// Delay between consecutive tiles starting to dance
    #[must_use]
    pub const fn dance_stagger_ms(&self) -> u64 {
        self.dance_duration_ms / 5
    }

    /// Time from submission until a row is fully revealed
    ///
    /// ```
    /// use wordle_game::game::GameConfig;
    ///
    /// assert_eq!(GameConfig::default().reveal_duration_ms(), 1_500);
    /// ```
    #[must_use]
    pub const fn reveal_duration_ms(&self) -> u64 {
        (crate::core::WORD_LENGTH as u64 - 1) * self.flip_stagger_ms() + self.flip_duration_ms
    }
}
