//! Animation sequencing
//!
//! Animations are pure timing: the sequencer turns "reveal this row" or
//! "shake these tiles" into tasks on the [`Scheduler`], and tracks which tiles
//! are mid-animation so front ends can draw them. State changes driven by
//! those tasks (tile results, key statuses, the lock) belong to the game.
//!
//! Reveal timing for tile `i`, with `h = flip_duration / 2`:
//! - flip starts at `i * h`
//! - result lands at `i * h + h` (tile is edge-on)
//! - flip ends at `i * h + 2h`; the last tile's end completes the row

use super::board::Position;
use super::config::GameConfig;
use super::events::GameEvent;
use super::schedule::Scheduler;
use crate::core::{Evaluation, Feedback, Word};
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    Flip,
    Shake,
    Dance,
}

/// One tile's part of a row reveal
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Flip {
    pub position: Position,
    pub evaluation: Evaluation,
    /// Set on the last tile of the row: the guess whose reveal it completes
    pub completes_row: Option<Word>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Task {
    FlipStart(Flip),
    FlipHalfway(Flip),
    FlipFinished(Flip),
    ShakeFinished(Vec<Position>),
    DanceStart(Position),
    DanceFinished(Position),
    DismissNotification(u64),
}

#[derive(Debug, Clone)]
pub struct AnimationSequencer {
    flip_half_ms: u64,
    shake_ms: u64,
    dance_ms: u64,
    dance_stagger_ms: u64,
    active: FxHashMap<Position, AnimationKind>,
}

impl AnimationSequencer {
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            flip_half_ms: config.flip_stagger_ms(),
            shake_ms: config.shake_duration_ms,
            dance_ms: config.dance_duration_ms,
            dance_stagger_ms: config.dance_stagger_ms(),
            active: FxHashMap::default(),
        }
    }

    /// Animation currently playing on a tile
    #[must_use]
    pub fn animation_at(&self, position: Position) -> Option<AnimationKind> {
        self.active.get(&position).copied()
    }

    /// Schedule a staggered left-to-right reveal of `row`
    pub(crate) fn reveal_row(
        &self,
        scheduler: &mut Scheduler<Task>,
        row: usize,
        feedback: &Feedback,
        guess: &Word,
    ) {
        let evaluations = feedback.evaluations();
        let last = evaluations.len() - 1;

        for (col, &evaluation) in evaluations.iter().enumerate() {
            let flip = Flip {
                position: Position::new(row, col),
                evaluation,
                completes_row: (col == last).then(|| guess.clone()),
            };
            scheduler.schedule_in(col as u64 * self.flip_half_ms, Task::FlipStart(flip));
        }
    }

    /// Tile is now flipping: schedule the moment it turns edge-on
    pub(crate) fn flip_started(
        &mut self,
        scheduler: &mut Scheduler<Task>,
        flip: Flip,
    ) -> GameEvent {
        let event = self.start(AnimationKind::Flip, flip.position);
        scheduler.schedule_in(self.flip_half_ms, Task::FlipHalfway(flip));
        event
    }

    /// Result has been applied: schedule the flip back
    pub(crate) fn flip_halfway(&self, scheduler: &mut Scheduler<Task>, flip: Flip) {
        scheduler.schedule_in(self.flip_half_ms, Task::FlipFinished(flip));
    }

    /// Shake `tiles` together; a single completion task follows
    pub(crate) fn shake(
        &mut self,
        scheduler: &mut Scheduler<Task>,
        tiles: Vec<Position>,
    ) -> Vec<GameEvent> {
        let events = tiles
            .iter()
            .map(|&position| self.start(AnimationKind::Shake, position))
            .collect();
        scheduler.schedule_in(self.shake_ms, Task::ShakeFinished(tiles));
        events
    }

    /// Staggered celebration over `tiles`
    pub(crate) fn dance(&self, scheduler: &mut Scheduler<Task>, tiles: &[Position]) {
        for (index, &position) in tiles.iter().enumerate() {
            scheduler.schedule_in(
                index as u64 * self.dance_stagger_ms,
                Task::DanceStart(position),
            );
        }
    }

    pub(crate) fn dance_started(
        &mut self,
        scheduler: &mut Scheduler<Task>,
        position: Position,
    ) -> GameEvent {
        let event = self.start(AnimationKind::Dance, position);
        scheduler.schedule_in(self.dance_ms, Task::DanceFinished(position));
        event
    }

    pub(crate) fn start(&mut self, kind: AnimationKind, position: Position) -> GameEvent {
        self.active.insert(position, kind);
        GameEvent::AnimationStarted { kind, position }
    }

    pub(crate) fn finish(&mut self, kind: AnimationKind, position: Position) -> GameEvent {
        if self.active.get(&position) == Some(&kind) {
            self.active.remove(&position);
        }
        GameEvent::AnimationFinished { kind, position }
    }

    pub(crate) fn clear(&mut self) {
        self.active.clear();
    }
}
