use std::time::{Duration, Instant};

/// Default delay before a changed start/end pair actually issues a
/// route request.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Coalesces rapid successive input changes into a single route
/// request.
///
/// The current time is supplied by the caller on every call: the host
/// event loop stays in control of scheduling and tests need no
/// sleeping.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending_since: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending_since: None,
        }
    }

    /// Records an input change at `now`, restarting the delay window.
    pub fn touch(&mut self, now: Instant) {
        self.pending_since = Some(now);
    }

    /// True while a change is waiting for its delay to elapse.
    pub fn is_pending(&self) -> bool {
        self.pending_since.is_some()
    }

    /// Returns true once the delay has elapsed since the last change,
    /// clearing the pending state so the request fires exactly once.
    pub fn should_fire(&mut self, now: Instant) -> bool {
        match self.pending_since {
            Some(since) if now.duration_since(since) >= self.delay => {
                self.pending_since = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}
