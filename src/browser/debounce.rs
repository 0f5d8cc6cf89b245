use std::time::{Duration, Instant};

/// Longest quiet period a debouncer will wait.
pub const MAX_WINDOW: Duration = Duration::from_secs(60);

/// Holds the latest value until it has been left alone for `window`.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    /// `window` is capped at [`MAX_WINDOW`].
    pub fn new(window: Duration) -> Self {
        Self {
            window: window.min(MAX_WINDOW),
            pending: None,
        }
    }

    /// Replaces any pending value and restarts the quiet period.
    pub fn schedule(&mut self, value: T, now: Instant) {
        let at = now.checked_add(self.window).unwrap_or(now);
        self.pending = Some((value, at));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, at)| *at)
    }

    /// Releases the pending value once its deadline has passed.
    pub fn fire(&mut self, now: Instant) -> Option<T> {
        match self.deadline() {
            Some(at) if now >= at => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }
}
