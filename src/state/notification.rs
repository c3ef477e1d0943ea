use std::time::{Duration, Instant};

/// How long a toast stays up when nobody dismisses it.
pub const DEFAULT_AUTO_HIDE: Duration = Duration::from_secs(3);

/// Toast shown after every remote mutation.
#[derive(Debug, Clone)]
pub struct Notification {
    message: String,
    visible: bool,
    shown_at: Option<Instant>,
    auto_hide: Duration,
}

impl Notification {
    pub fn new(auto_hide: Duration) -> Self {
        Self {
            message: String::new(),
            visible: false,
            shown_at: None,
            auto_hide,
        }
    }

    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.message = message.into();
        self.visible = true;
        self.shown_at = Some(now);
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
        self.shown_at = None;
    }

    /// Hide the toast once its interval has elapsed. Returns the remaining
    /// time while it is still visible, so the caller can schedule a repaint.
    pub fn tick(&mut self, now: Instant) -> Option<Duration> {
        let shown_at = self.shown_at.filter(|_| self.visible)?;
        let elapsed = now.saturating_duration_since(shown_at);
        if elapsed >= self.auto_hide {
            self.dismiss();
            None
        } else {
            Some(self.auto_hide - elapsed)
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for Notification {
    fn default() -> Self {
        Self::new(DEFAULT_AUTO_HIDE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let n = Notification::default();
        assert!(!n.is_visible());
    }

    #[test]
    fn hides_after_interval() {
        let start = Instant::now();
        let mut n = Notification::default();
        n.show("Sample deleted", start);
        assert_eq!(n.tick(start + Duration::from_secs(1)), Some(Duration::from_secs(2)));
        assert!(n.is_visible());
        assert_eq!(n.tick(start + Duration::from_secs(3)), None);
        assert!(!n.is_visible());
    }

    #[test]
    fn new_message_restarts_interval() {
        let start = Instant::now();
        let mut n = Notification::new(Duration::from_secs(2));
        n.show("first", start);
        n.show("second", start + Duration::from_millis(1500));
        assert!(n.tick(start + Duration::from_millis(2500)).is_some());
        assert_eq!(n.message(), "second");
    }

    #[test]
    fn dismiss_hides_immediately() {
        let start = Instant::now();
        let mut n = Notification::default();
        n.show("x", start);
        n.dismiss();
        assert!(!n.is_visible());
        assert_eq!(n.tick(start), None);
    }
}
