//! Timer queue on an explicit millisecond clock
//!
//! Everything that "waits" in the game (flip halves, shakes, dances, alert
//! dismissal) is a task scheduled here. Tasks fire in due-time order; tasks
//! due at the same instant fire in the order they were scheduled.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

#[derive(Debug)]
struct Scheduled<T> {
    due_ms: u64,
    seq: u64,
    task: T,
}

impl<T> PartialEq for Scheduled<T> {
    fn eq(&self, other: &Self) -> bool {
        self.due_ms == other.due_ms && self.seq == other.seq
    }
}

impl<T> Eq for Scheduled<T> {}

impl<T> PartialOrd for Scheduled<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Scheduled<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.due_ms, self.seq).cmp(&(other.due_ms, other.seq))
    }
}

#[derive(Debug)]
pub struct Scheduler<T> {
    now_ms: u64,
    next_seq: u64,
    queue: BinaryHeap<Reverse<Scheduled<T>>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            now_ms: 0,
            next_seq: 0,
            queue: BinaryHeap::new(),
        }
    }
}

impl<T> Scheduler<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock value
    #[must_use]
    pub const fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Run `task` `delay_ms` after now
    pub fn schedule_in(&mut self, delay_ms: u64, task: T) {
        self.schedule_at(self.now_ms.saturating_add(delay_ms), task);
    }

    /// Run `task` at `due_ms`; times in the past fire on the next pop
    pub fn schedule_at(&mut self, due_ms: u64, task: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Reverse(Scheduled {
            due_ms: due_ms.max(self.now_ms),
            seq,
            task,
        }));
    }

    /// Pop the next task due at or before `until_ms`, moving the clock to it
    pub fn pop_due(&mut self, until_ms: u64) -> Option<T> {
        let due = self.next_due_ms()?;
        if due > until_ms {
            return None;
        }
        self.pop_next()
    }

    /// Pop the next task regardless of its due time, moving the clock to it
    pub fn pop_next(&mut self) -> Option<T> {
        let Reverse(next) = self.queue.pop()?;
        self.now_ms = self.now_ms.max(next.due_ms);
        Some(next.task)
    }

    /// Move the clock forward without firing anything
    pub fn advance_to(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    #[must_use]
    pub fn next_due_ms(&self) -> Option<u64> {
        self.queue.peek().map(|Reverse(next)| next.due_ms)
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Drop every pending task and reset the clock
    pub fn reset(&mut self) {
        self.queue.clear();
        self.now_ms = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_in_due_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_at(30, "c");
        scheduler.schedule_at(10, "a");
        scheduler.schedule_at(20, "b");

        assert_eq!(scheduler.pop_next(), Some("a"));
        assert_eq!(scheduler.now_ms(), 10);
        assert_eq!(scheduler.pop_next(), Some("b"));
        assert_eq!(scheduler.pop_next(), Some("c"));
        assert_eq!(scheduler.pop_next(), None);
        assert_eq!(scheduler.now_ms(), 30);
    }

    #[test]
    fn same_instant_keeps_scheduling_order() {
        let mut scheduler = Scheduler::new();
        for i in 0..10 {
            scheduler.schedule_at(5, i);
        }
        let fired: Vec<_> = std::iter::from_fn(|| scheduler.pop_next()).collect();
        assert_eq!(fired, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn pop_due_respects_horizon() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_in(100, 1);

        assert_eq!(scheduler.pop_due(99), None);
        assert_eq!(scheduler.now_ms(), 0);
        assert_eq!(scheduler.pop_due(100), Some(1));
        assert_eq!(scheduler.now_ms(), 100);
    }

    #[test]
    fn schedule_in_is_relative_to_clock() {
        let mut scheduler = Scheduler::new();
        scheduler.advance_to(1_000);
        scheduler.schedule_in(250, ());
        assert_eq!(scheduler.next_due_ms(), Some(1_250));
    }

    #[test]
    fn past_due_times_are_clamped_to_now() {
        let mut scheduler = Scheduler::new();
        scheduler.advance_to(500);
        scheduler.schedule_at(100, ());
        assert_eq!(scheduler.next_due_ms(), Some(500));
    }

    #[test]
    fn clock_never_moves_backwards() {
        let mut scheduler: Scheduler<()> = Scheduler::new();
        scheduler.advance_to(50);
        scheduler.advance_to(10);
        assert_eq!(scheduler.now_ms(), 50);
    }

    #[test]
    fn reset_clears_queue_and_clock() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_in(10, ());
        scheduler.advance_to(5);
        scheduler.reset();
        assert!(scheduler.is_idle());
        assert_eq!(scheduler.now_ms(), 0);
    }
}
