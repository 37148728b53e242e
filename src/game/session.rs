//! A single game session
//!
//! [`Game`] owns every piece of mutable state for one puzzle: the board, the
//! keyboard statuses, the interaction lock, pending timers and visible
//! notifications. It is driven from the outside by two kinds of calls:
//! input ([`Game::dispatch`]) and time ([`Game::advance`]).

use super::animation::{AnimationKind, AnimationSequencer, Flip, Task};
use super::board::{Board, Cell, CellState, Position};
use super::config::{GameConfig, MAX_ATTEMPTS};
use super::events::GameEvent;
use super::input::{Action, InputEvent};
use super::keys::KeyStatuses;
use super::lock::{InteractionLock, LockState};
use super::notify::{Notification, NotificationPresenter};
use super::schedule::Scheduler;
use crate::core::{Evaluation, Feedback, WORD_LENGTH, Word};
use crate::wordlists::WordSource;
use std::fmt;

pub const WIN_MESSAGE: &str = "You win!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameOutcome {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameOutcome {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// A guess the player has to fix before it can be evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    NotEnoughLetters,
    NotInWordList,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEnoughLetters => write!(f, "Not enough letters"),
            Self::NotInWordList => write!(f, "Not in word list"),
        }
    }
}

impl std::error::Error for GuessError {}

/// What happened to a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Input is suspended or the game is over
    Ignored,
    /// Rejected with a notification and a shake
    Rejected(GuessError),
    /// Accepted; the reveal is now running
    Revealing(Feedback),
}

#[derive(Debug)]
pub struct Game<'a> {
    source: &'a WordSource,
    target: Word,
    config: GameConfig,
    board: Board,
    keys: KeyStatuses,
    lock: InteractionLock,
    outcome: GameOutcome,
    attempts: usize,
    scheduler: Scheduler<Task>,
    animator: AnimationSequencer,
    notifications: NotificationPresenter,
    events: Vec<GameEvent>,
}

impl<'a> Game<'a> {
    /// Start a session guessing `target`
    #[must_use]
    pub fn new(source: &'a WordSource, target: Word, mut config: GameConfig) -> Self {
        config.max_attempts = config.max_attempts.clamp(1, MAX_ATTEMPTS);
        Self {
            source,
            target,
            board: Board::new(config.max_attempts),
            animator: AnimationSequencer::new(&config),
            config,
            keys: KeyStatuses::new(),
            lock: InteractionLock::new(),
            outcome: GameOutcome::InProgress,
            attempts: 0,
            scheduler: Scheduler::new(),
            notifications: NotificationPresenter::new(),
            events: Vec::new(),
        }
    }

    /// Start a session on the daily target for `day`
    #[must_use]
    pub fn for_day(source: &'a WordSource, day: i64, config: GameConfig) -> Self {
        let target = source.target_for_day(day).clone();
        log::info!("day {day}: new daily game");
        Self::new(source, target, config)
    }

    /// Throw away the current session and start over on `target`
    ///
    /// Pending animations and timers are discarded.
    pub fn new_game(&mut self, target: Word) {
        self.target = target;
        self.board = Board::new(self.config.max_attempts);
        self.keys.clear();
        self.lock = InteractionLock::new();
        self.outcome = GameOutcome::InProgress;
        self.attempts = 0;
        self.scheduler.reset();
        self.animator.clear();
        self.notifications.clear();
        self.events.clear();
        self.events.push(GameEvent::Reset);
        log::debug!("new game started");
    }

    /// Single entry point for player input
    ///
    /// Returns `true` if the input changed anything. Everything is ignored
    /// while the lock is not listening.
    pub fn dispatch(&mut self, event: InputEvent) -> bool {
        if !self.lock.is_listening() {
            return false;
        }
        match event.action() {
            Some(Action::TypeLetter(letter)) => self.press_letter(char::from(letter)),
            Some(Action::Delete) => self.delete_letter(),
            Some(Action::Submit) => !matches!(self.submit_guess(), Submission::Ignored),
            None => false,
        }
    }

    /// Type a letter into the current row
    ///
    /// No-op on a full row, for non-letters, or while input is suspended.
    pub fn press_letter(&mut self, ch: char) -> bool {
        if !self.lock.is_listening() || !ch.is_ascii_alphabetic() {
            return false;
        }
        match self.board.press_letter(ch as u8) {
            Some(position) => {
                self.tile_changed(position);
                true
            }
            None => false,
        }
    }

    /// Remove the last typed letter of the current row
    pub fn delete_letter(&mut self) -> bool {
        if !self.lock.is_listening() {
            return false;
        }
        match self.board.delete_letter() {
            Some(position) => {
                self.tile_changed(position);
                true
            }
            None => false,
        }
    }

    /// Submit the current row as a guess
    ///
    /// Input is suspended for the whole shake (rejected guess) or reveal
    /// (accepted guess) that follows.
    pub fn submit_guess(&mut self) -> Submission {
        if !self.lock.is_listening() || self.outcome.is_over() {
            return Submission::Ignored;
        }
        let Some(row) = self.board.current_row() else {
            return Submission::Ignored;
        };

        let tiles = self.board.active_tiles();
        let letters = self.board.active_letters();
        self.suspend();

        if tiles.len() != WORD_LENGTH {
            return self.reject(GuessError::NotEnoughLetters, tiles);
        }

        let guess = match Word::from_letters(&letters) {
            Ok(guess) if self.source.is_valid_guess(guess.text()) => guess,
            _ => return self.reject(GuessError::NotInWordList, tiles),
        };

        let feedback = Feedback::calculate(&guess, &self.target);
        log::debug!("row {row}: {guess} {}", feedback.to_emoji());

        self.animator
            .reveal_row(&mut self.scheduler, row, &feedback, &guess);
        Submission::Revealing(feedback)
    }

    /// Move the game clock forward, firing every task that comes due
    pub fn advance(&mut self, elapsed_ms: u64) {
        let until = self.scheduler.now_ms().saturating_add(elapsed_ms);
        while let Some(task) = self.scheduler.pop_due(until) {
            self.handle(task);
        }
        self.scheduler.advance_to(until);
    }

    /// Fire every pending task, however far in the future
    pub fn run_until_idle(&mut self) {
        while let Some(task) = self.scheduler.pop_next() {
            self.handle(task);
        }
    }

    /// Take the queued presentation events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn keys(&self) -> &KeyStatuses {
        &self.keys
    }

    #[must_use]
    pub fn key_status(&self, letter: char) -> Option<Evaluation> {
        letter
            .is_ascii_alphabetic()
            .then(|| self.keys.get(letter as u8))
            .flatten()
    }

    #[must_use]
    pub const fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Rows fully revealed so far
    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.lock.is_listening()
    }

    #[must_use]
    pub const fn lock_state(&self) -> LockState {
        self.lock.state()
    }

    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        self.notifications.active()
    }

    #[must_use]
    pub fn animation_at(&self, position: Position) -> Option<AnimationKind> {
        self.animator.animation_at(position)
    }

    #[must_use]
    pub const fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    /// Whether no timers are pending
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.scheduler.is_idle()
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// The target, once the game is over
    #[must_use]
    pub fn revealed_target(&self) -> Option<&Word> {
        self.outcome.is_over().then_some(&self.target)
    }

    /// Revealed rows as (guess, feedback) pairs
    #[must_use]
    pub fn history(&self) -> Vec<(Word, Feedback)> {
        self.board.rows()[..self.attempts.min(self.board.row_count())]
            .iter()
            .filter_map(revealed_row)
            .collect()
    }

    fn handle(&mut self, task: Task) {
        match task {
            Task::FlipStart(flip) => {
                let event = self.animator.flip_started(&mut self.scheduler, flip);
                self.events.push(event);
            }
            Task::FlipHalfway(flip) => {
                self.apply_result(flip.position, flip.evaluation);
                self.animator.flip_halfway(&mut self.scheduler, flip);
            }
            Task::FlipFinished(Flip {
                position,
                completes_row,
                ..
            }) => {
                let event = self.animator.finish(AnimationKind::Flip, position);
                self.events.push(event);
                if let Some(guess) = completes_row {
                    self.row_revealed(position.row, &guess);
                }
            }
            Task::ShakeFinished(tiles) => {
                for position in tiles {
                    let event = self.animator.finish(AnimationKind::Shake, position);
                    self.events.push(event);
                }
                if !self.outcome.is_over() {
                    self.resume();
                }
            }
            Task::DanceStart(position) => {
                let event = self.animator.dance_started(&mut self.scheduler, position);
                self.events.push(event);
            }
            Task::DanceFinished(position) => {
                let event = self.animator.finish(AnimationKind::Dance, position);
                self.events.push(event);
            }
            Task::DismissNotification(id) => {
                if self.notifications.dismiss(id) {
                    self.events.push(GameEvent::NotificationDismissed { id });
                }
            }
        }
    }

    fn apply_result(&mut self, position: Position, evaluation: Evaluation) {
        if !self.board.reveal_cell(position, evaluation) {
            return;
        }
        self.tile_changed(position);

        let Some(letter) = self.board.cell(position).and_then(Cell::letter) else {
            return;
        };
        if self.keys.record(letter, evaluation)
            && let Some(status) = self.keys.get(letter)
        {
            self.events.push(GameEvent::KeyChanged {
                letter: char::from(letter),
                status,
            });
        }
    }

    fn row_revealed(&mut self, row: usize, guess: &Word) {
        self.attempts += 1;
        self.board.advance_row();

        if *guess == self.target {
            log::info!("won in {} attempts", self.attempts);
            self.conclude(GameOutcome::Won);
            self.notify(WIN_MESSAGE, self.config.win_alert_duration_ms);
            let tiles: Vec<Position> = (0..WORD_LENGTH).map(|col| Position::new(row, col)).collect();
            self.animator.dance(&mut self.scheduler, &tiles);
            return;
        }

        if !self.board.has_empty_cells() {
            log::info!("lost, target was {}", self.target);
            self.conclude(GameOutcome::Lost);
            let answer = self.target.text().to_uppercase();
            self.notify(&answer, self.config.loss_alert_duration_ms);
            return;
        }

        self.resume();
    }

    fn reject(&mut self, error: GuessError, tiles: Vec<Position>) -> Submission {
        log::debug!("guess rejected: {error}");
        self.notify(&error.to_string(), self.config.alert_duration_ms);
        let events = self.animator.shake(&mut self.scheduler, tiles);
        self.events.extend(events);
        Submission::Rejected(error)
    }

    fn conclude(&mut self, outcome: GameOutcome) {
        self.outcome = outcome;
        self.events.push(GameEvent::OutcomeChanged(outcome));
        if self.lock.freeze() {
            self.events.push(GameEvent::LockChanged { listening: false });
        }
    }

    fn notify(&mut self, message: &str, duration_ms: u64) {
        let id = self
            .notifications
            .show(message, duration_ms, self.scheduler.now_ms());
        self.scheduler
            .schedule_in(duration_ms, Task::DismissNotification(id));
        self.events.push(GameEvent::Notify {
            id,
            message: message.to_string(),
            duration_ms,
        });
    }

    fn suspend(&mut self) {
        if self.lock.suspend() {
            self.events.push(GameEvent::LockChanged { listening: false });
        }
    }

    fn resume(&mut self) {
        if self.lock.resume() {
            self.events.push(GameEvent::LockChanged { listening: true });
        }
    }

    fn tile_changed(&mut self, position: Position) {
        if let Some(cell) = self.board.cell(position) {
            self.events.push(GameEvent::TileChanged {
                position,
                letter: cell.letter_char(),
                state: cell.state(),
            });
        }
    }
}

fn revealed_row(row: &[Cell; WORD_LENGTH]) -> Option<(Word, Feedback)> {
    let mut letters = [0u8; WORD_LENGTH];
    let mut evaluations = [Evaluation::Wrong; WORD_LENGTH];
    for (i, cell) in row.iter().enumerate() {
        letters[i] = cell.letter()?;
        evaluations[i] = match cell.state() {
            CellState::Revealed(evaluation) => evaluation,
            _ => return None,
        };
    }
    let word = Word::from_letters(&letters).ok()?;
    Some((word, Feedback::new(evaluations)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::input::KeyId;
    use crate::wordlists::loader::words_from_slice;

    fn source() -> WordSource {
        WordSource::new(
            words_from_slice(&["plane", "cigar"]),
            words_from_slice(&["crane", "plant", "apple", "slate"]),
        )
        .unwrap()
    }

    #[test]
    fn attempts_are_clamped_to_board_limits() {
        let source = source();
        let huge = GameConfig {
            max_attempts: usize::MAX / 4,
            ..GameConfig::default()
        };
        let game = Game::for_day(&source, 0, huge);
        assert_eq!(game.board().row_count(), MAX_ATTEMPTS);
        assert_eq!(game.config().max_attempts, MAX_ATTEMPTS);

        let none = GameConfig {
            max_attempts: 0,
            ..GameConfig::default()
        };
        assert_eq!(Game::for_day(&source, 0, none).board().row_count(), 1);
    }

    fn game(source: &WordSource) -> Game<'_> {
        Game::for_day(source, 0, GameConfig::default())
    }

    fn type_word(game: &mut Game<'_>, word: &str) {
        for c in word.chars() {
            game.dispatch(InputEvent::Char(c));
        }
    }

    fn guess(game: &mut Game<'_>, word: &str) -> Submission {
        type_word(game, word);
        let submission = game.submit_guess();
        game.run_until_idle();
        submission
    }

    fn row_letters(game: &Game<'_>, row: usize) -> String {
        game.board().rows()[row]
            .iter()
            .filter_map(Cell::letter_char)
            .collect()
    }

    #[test]
    fn short_guess_is_rejected_without_mutation() {
        let source = source();
        let mut game = game(&source);
        type_word(&mut game, "pla");

        assert_eq!(
            game.submit_guess(),
            Submission::Rejected(GuessError::NotEnoughLetters)
        );
        assert_eq!(game.notifications()[0].message, "Not enough letters");
        assert_eq!(game.lock_state(), LockState::Suspended);
        assert_eq!(game.animation_at(Position::new(0, 0)), Some(AnimationKind::Shake));

        game.advance(249);
        assert!(!game.is_listening());
        game.advance(1);
        assert!(game.is_listening());

        assert_eq!(game.board().current_row(), Some(0));
        assert_eq!(row_letters(&game, 0), "pla");
        assert_eq!(game.board().active_tiles().len(), 3);
        assert!(game.keys().is_empty());
        assert_eq!(game.attempts(), 0);
    }

    #[test]
    fn empty_submission_still_shakes_and_reopens() {
        let source = source();
        let mut game = game(&source);

        assert_eq!(
            game.submit_guess(),
            Submission::Rejected(GuessError::NotEnoughLetters)
        );
        game.advance(250);
        assert!(game.is_listening());
    }

    #[test]
    fn unknown_word_is_rejected_without_mutation() {
        let source = source();
        let mut game = game(&source);
        type_word(&mut game, "zzzzz");

        assert_eq!(
            game.submit_guess(),
            Submission::Rejected(GuessError::NotInWordList)
        );
        assert_eq!(game.notifications()[0].message, "Not in word list");
        game.run_until_idle();

        assert!(game.is_listening());
        assert_eq!(game.board().current_row(), Some(0));
        assert_eq!(row_letters(&game, 0), "zzzzz");
        assert!(game.keys().is_empty());
        assert!(game.board().rows()[1].iter().all(|c| c.letter().is_none()));

        // Row is still editable after the shake
        assert!(game.dispatch(InputEvent::Backspace));
        assert_eq!(row_letters(&game, 0), "zzzz");
    }

    #[test]
    fn notifications_dismiss_after_their_duration() {
        let source = source();
        let mut game = game(&source);
        game.submit_guess();
        game.drain_events();

        game.advance(999);
        assert_eq!(game.notifications().len(), 1);
        game.advance(1);
        assert!(game.notifications().is_empty());
        assert!(
            game.drain_events()
                .contains(&GameEvent::NotificationDismissed { id: 0 })
        );
    }

    #[test]
    fn input_is_ignored_while_revealing() {
        let source = source();
        let mut game = game(&source);
        type_word(&mut game, "crane");
        assert!(matches!(game.submit_guess(), Submission::Revealing(_)));

        assert!(!game.dispatch(InputEvent::Char('a')));
        assert!(!game.dispatch(InputEvent::Backspace));
        assert!(!game.dispatch(InputEvent::Click(KeyId::Enter)));
        assert_eq!(game.submit_guess(), Submission::Ignored);
        assert!(!game.press_letter('a'));
        assert!(!game.delete_letter());

        game.run_until_idle();
        assert!(game.board().rows()[1].iter().all(|c| c.letter().is_none()));
        assert!(game.dispatch(InputEvent::Char('a')));
    }

    #[test]
    fn reveal_is_staggered_left_to_right() {
        let source = source();
        let mut game = game(&source);
        type_word(&mut game, "crane");
        game.submit_guess();

        let state = |game: &Game<'_>, col| game.board().cell(Position::new(0, col)).unwrap().state();

        game.advance(249);
        assert_eq!(state(&game, 0), CellState::Active);

        game.advance(1);
        assert_eq!(state(&game, 0), CellState::Revealed(Evaluation::Wrong));
        assert_eq!(state(&game, 1), CellState::Active);

        game.advance(999);
        assert_eq!(state(&game, 3), CellState::Revealed(Evaluation::Correct));
        assert_eq!(state(&game, 4), CellState::Active);

        game.advance(1);
        assert_eq!(state(&game, 4), CellState::Revealed(Evaluation::Correct));

        game.advance(249);
        assert!(!game.is_listening());
        assert_eq!(game.board().current_row(), Some(0));

        game.advance(1);
        assert_eq!(game.now_ms(), game.config().reveal_duration_ms());
        assert!(game.is_listening());
        assert_eq!(game.board().current_row(), Some(1));
        assert_eq!(game.attempts(), 1);
    }

    #[test]
    fn reveal_emits_lock_and_key_events_in_order() {
        let source = source();
        let mut game = game(&source);
        type_word(&mut game, "crane");
        game.drain_events();

        game.submit_guess();
        game.run_until_idle();
        let events = game.drain_events();

        assert_eq!(events.first(), Some(&GameEvent::LockChanged { listening: false }));
        assert_eq!(events.last(), Some(&GameEvent::LockChanged { listening: true }));

        let keys: Vec<(char, Evaluation)> = events
            .iter()
            .filter_map(|e| match e {
                GameEvent::KeyChanged { letter, status } => Some((*letter, *status)),
                _ => None,
            })
            .collect();
        assert_eq!(
            keys,
            [
                ('c', Evaluation::Wrong),
                ('r', Evaluation::Wrong),
                ('a', Evaluation::Correct),
                ('n', Evaluation::Correct),
                ('e', Evaluation::Correct),
            ]
        );
    }

    #[test]
    fn plane_is_won_on_third_attempt() {
        let source = source();
        let mut game = game(&source);
        assert_eq!(game.target().text(), "plane");

        assert_eq!(
            guess(&mut game, "crane"),
            Submission::Revealing(Feedback::parse("--GGG").unwrap())
        );
        assert_eq!(game.outcome(), GameOutcome::InProgress);
        assert_eq!(
            guess(&mut game, "plant"),
            Submission::Revealing(Feedback::parse("GGGG-").unwrap())
        );
        assert_eq!(game.outcome(), GameOutcome::InProgress);
        game.drain_events();

        assert!(matches!(guess(&mut game, "plane"), Submission::Revealing(f) if f.is_perfect()));
        assert_eq!(game.outcome(), GameOutcome::Won);
        assert_eq!(game.attempts(), 3);
        assert_eq!(game.lock_state(), LockState::Frozen);
        assert_eq!(game.revealed_target().map(Word::text), Some("plane"));

        let events = game.drain_events();
        assert!(events.contains(&GameEvent::OutcomeChanged(GameOutcome::Won)));
        assert!(events.iter().any(|e| matches!(
            e,
            GameEvent::Notify { message, duration_ms: 5_000, .. } if message == WIN_MESSAGE
        )));
        let dances = events
            .iter()
            .filter(|e| matches!(e, GameEvent::AnimationStarted { kind: AnimationKind::Dance, .. }))
            .count();
        assert_eq!(dances, WORD_LENGTH);
        assert!(!events.contains(&GameEvent::LockChanged { listening: true }));

        assert_eq!(game.key_status('p'), Some(Evaluation::Correct));
        assert_eq!(game.key_status('t'), Some(Evaluation::Wrong));
        assert_eq!(game.key_status('z'), None);
    }

    #[test]
    fn win_freezes_input_for_good() {
        let source = source();
        let mut game = game(&source);
        guess(&mut game, "plane");

        assert!(!game.dispatch(InputEvent::Char('a')));
        assert_eq!(game.submit_guess(), Submission::Ignored);
        game.advance(60_000);
        assert!(!game.is_listening());
        assert_eq!(game.board().cell(Position::new(1, 0)).unwrap().letter(), None);
    }

    #[test]
    fn full_board_without_win_is_lost() {
        let source = source();
        let config = GameConfig {
            max_attempts: 2,
            ..GameConfig::default()
        };
        let mut game = Game::for_day(&source, 0, config);

        guess(&mut game, "crane");
        assert!(game.is_listening());
        assert_eq!(game.revealed_target(), None);
        game.drain_events();

        guess(&mut game, "plant");
        assert_eq!(game.outcome(), GameOutcome::Lost);
        assert_eq!(game.lock_state(), LockState::Frozen);
        assert_eq!(game.revealed_target().map(Word::text), Some("plane"));

        let events = game.drain_events();
        assert!(events.iter().any(|e| matches!(
            e,
            GameEvent::Notify { message, duration_ms: 10_000, .. } if message == "PLANE"
        )));
        assert!(!events.contains(&GameEvent::LockChanged { listening: true }));
        assert!(!game.dispatch(InputEvent::Char('a')));
    }

    #[test]
    fn correct_key_is_never_downgraded() {
        let source = source();
        let mut game = game(&source);

        guess(&mut game, "plant");
        assert_eq!(game.key_status('p'), Some(Evaluation::Correct));

        // APPLE vs PLANE: first P misplaced, second P wrong
        assert_eq!(
            guess(&mut game, "apple"),
            Submission::Revealing(Feedback::parse("YY-YG").unwrap())
        );
        assert_eq!(game.key_status('p'), Some(Evaluation::Correct));
        assert_eq!(game.key_status('a'), Some(Evaluation::Correct));
        assert_eq!(game.key_status('l'), Some(Evaluation::Correct));
    }

    #[test]
    fn repeated_delete_on_empty_row_is_noop() {
        let source = source();
        let mut game = game(&source);

        assert!(!game.dispatch(InputEvent::Backspace));
        assert!(!game.dispatch(InputEvent::Click(KeyId::Delete)));
        assert!(game.drain_events().is_empty());
        assert!(game.is_listening());
    }

    #[test]
    fn sixth_letter_is_ignored() {
        let source = source();
        let mut game = game(&source);
        type_word(&mut game, "planes");
        assert_eq!(row_letters(&game, 0), "plane");
        assert!(game.board().rows()[1].iter().all(|c| c.letter().is_none()));
    }

    #[test]
    fn on_screen_keys_type_and_submit() {
        let source = source();
        let mut game = game(&source);
        for c in "plane".chars() {
            assert!(game.dispatch(InputEvent::Click(KeyId::Letter(c))));
        }
        assert!(game.dispatch(InputEvent::Click(KeyId::Enter)));
        game.run_until_idle();
        assert_eq!(game.outcome(), GameOutcome::Won);
    }

    #[test]
    fn history_lists_revealed_rows() {
        let source = source();
        let mut game = game(&source);
        guess(&mut game, "crane");
        type_word(&mut game, "pla");

        let history = game.history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].0.text(), "crane");
        assert_eq!(history[0].1, Feedback::parse("--GGG").unwrap());
    }

    #[test]
    fn new_game_resets_session() {
        let source = source();
        let mut game = game(&source);
        guess(&mut game, "plane");
        assert_eq!(game.outcome(), GameOutcome::Won);

        game.new_game(Word::new("cigar").unwrap());

        assert_eq!(game.outcome(), GameOutcome::InProgress);
        assert!(game.is_listening());
        assert!(game.keys().is_empty());
        assert!(game.notifications().is_empty());
        assert!(game.is_idle());
        assert_eq!(game.attempts(), 0);
        assert_eq!(game.board().current_row(), Some(0));
        assert_eq!(game.drain_events(), [GameEvent::Reset]);
        assert_eq!(game.target().text(), "cigar");
    }
}
