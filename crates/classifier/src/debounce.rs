//! Leading-edge debouncing.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Window shared by both classifiers.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(100);

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manually advanced clock for tests and replays.
///
/// Clones share the same time.
#[derive(Clone)]
pub struct ManualClock {
    now: Arc<Mutex<Instant>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self {
            now: Arc::new(Mutex::new(Instant::now())),
        }
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap()
    }
}

/// Admits the first call of a burst and drops the rest.
///
/// A burst lasts until `window` passes without any call. Dropped calls
/// still extend the burst; nothing is ever queued for a trailing edge.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    last_call: Option<Instant>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_WINDOW)
    }
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_call: None,
        }
    }

    /// Record a call at `now` and report whether it opens a new burst.
    pub fn admit(&mut self, now: Instant) -> bool {
        let leading = match self.last_call {
            None => true,
            Some(prev) => now.saturating_duration_since(prev) >= self.window,
        };
        self.last_call = Some(now);
        leading
    }
}
