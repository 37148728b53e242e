//! Interaction lock
//!
//! Gates input while an animation is in flight. Once the game is over the
//! lock is frozen and never listens again.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LockState {
    #[default]
    Listening,
    Suspended,
    /// Suspended for good: the game has concluded
    Frozen,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InteractionLock {
    state: LockState,
}

impl InteractionLock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> LockState {
        self.state
    }

    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.state == LockState::Listening
    }

    /// Stop accepting input until [`resume`](Self::resume)
    ///
    /// Returns `true` if the lock was listening.
    pub fn suspend(&mut self) -> bool {
        if self.state != LockState::Listening {
            return false;
        }
        self.state = LockState::Suspended;
        true
    }

    /// Accept input again, unless frozen
    ///
    /// Returns `true` if the lock started listening.
    pub fn resume(&mut self) -> bool {
        if self.state != LockState::Suspended {
            return false;
        }
        self.state = LockState::Listening;
        true
    }

    /// Stop accepting input permanently
    ///
    /// Returns `true` if the lock was listening.
    pub fn freeze(&mut self) -> bool {
        let was_listening = self.is_listening();
        self.state = LockState::Frozen;
        was_listening
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_listening() {
        assert!(InteractionLock::new().is_listening());
    }

    #[test]
    fn suspend_and_resume() {
        let mut lock = InteractionLock::new();
        assert!(lock.suspend());
        assert!(!lock.suspend());
        assert_eq!(lock.state(), LockState::Suspended);
        assert!(lock.resume());
        assert!(!lock.resume());
        assert!(lock.is_listening());
    }

    #[test]
    fn frozen_never_resumes() {
        let mut lock = InteractionLock::new();
        lock.suspend();
        assert!(!lock.freeze());
        assert!(!lock.resume());
        assert!(!lock.suspend());
        assert_eq!(lock.state(), LockState::Frozen);
    }

    #[test]
    fn freeze_from_listening_reports_change() {
        let mut lock = InteractionLock::new();
        assert!(lock.freeze());
        assert!(!lock.is_listening());
    }
}
