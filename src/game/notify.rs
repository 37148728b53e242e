//! Transient user-facing messages

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub expires_at_ms: u64,
}

/// Visible notifications, newest first
///
/// Dismissal timers are owned by the caller; the presenter only tracks what
/// is on screen.
#[derive(Debug, Clone, Default)]
pub struct NotificationPresenter {
    next_id: u64,
    visible: Vec<Notification>,
}

impl NotificationPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `message` on screen until `now_ms + duration_ms`; returns its id
    pub fn show(&mut self, message: impl Into<String>, duration_ms: u64, now_ms: u64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.visible.insert(
            0,
            Notification {
                id,
                message: message.into(),
                expires_at_ms: now_ms.saturating_add(duration_ms),
            },
        );
        id
    }

    /// Take a notification off screen; unknown ids are ignored
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.visible.len();
        self.visible.retain(|n| n.id != id);
        self.visible.len() != before
    }

    #[must_use]
    pub fn active(&self) -> &[Notification] {
        &self.visible
    }

    pub fn clear(&mut self) {
        self.visible.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_first() {
        let mut presenter = NotificationPresenter::new();
        presenter.show("first", 1_000, 0);
        presenter.show("second", 1_000, 10);

        let messages: Vec<_> = presenter.active().iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, ["second", "first"]);
        assert_eq!(presenter.active()[0].expires_at_ms, 1_010);
    }

    #[test]
    fn dismiss_removes_only_that_id() {
        let mut presenter = NotificationPresenter::new();
        let a = presenter.show("a", 100, 0);
        let b = presenter.show("b", 100, 0);

        assert!(presenter.dismiss(a));
        assert!(!presenter.dismiss(a));
        assert_eq!(presenter.active().len(), 1);
        assert_eq!(presenter.active()[0].id, b);
    }

    #[test]
    fn ids_are_unique() {
        let mut presenter = NotificationPresenter::new();
        let a = presenter.show("x", 1, 0);
        presenter.clear();
        let b = presenter.show("x", 1, 0);
        assert_ne!(a, b);
    }
}
