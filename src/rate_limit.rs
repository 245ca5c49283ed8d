//! Fixed-interval request pacing
//!
//! Discogs allows 60 unauthenticated requests per minute. Every request is
//! preceded by [`RequestPacer::wait`], which sleeps until at least one interval
//! has passed since the previous request (and one full interval before the
//! first request).

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Time source used by the pacer
pub trait Clock: Send {
    fn now(&self) -> Instant;
    fn sleep(&self, duration: Duration);
}

/// Wall clock backed by `std::thread::sleep`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

#[derive(Debug)]
struct ManualState {
    origin: Instant,
    elapsed: Duration,
    sleeps: Vec<Duration>,
}

/// Virtual clock for tests: `sleep` advances time instantly and is recorded.
///
/// Clones share the same timeline, so a test can keep one handle while the
/// pacer owns another.
#[derive(Debug, Clone)]
pub struct ManualClock {
    state: Arc<Mutex<ManualState>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(ManualState {
                origin: Instant::now(),
                elapsed: Duration::ZERO,
                sleeps: Vec::new(),
            })),
        }
    }

    /// Move time forward without recording a sleep
    pub fn advance(&self, duration: Duration) {
        let mut state = self.lock();
        state.elapsed += duration;
    }

    /// Time passed since the clock was created
    pub fn elapsed(&self) -> Duration {
        self.lock().elapsed
    }

    /// Every sleep requested so far, in order
    pub fn sleeps(&self) -> Vec<Duration> {
        self.lock().sleeps.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ManualState> {
        // A poisoned lock only means another test thread panicked.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        let state = self.lock();
        state.origin + state.elapsed
    }

    fn sleep(&self, duration: Duration) {
        let mut state = self.lock();
        state.elapsed += duration;
        state.sleeps.push(duration);
    }
}

/// Spaces consecutive requests at least `interval` apart
pub struct RequestPacer {
    interval: Duration,
    clock: Box<dyn Clock>,
    last_request: Mutex<Option<Instant>>,
}

impl std::fmt::Debug for RequestPacer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestPacer")
            .field("interval", &self.interval)
            .finish_non_exhaustive()
    }
}

impl RequestPacer {
    pub fn new(interval: Duration) -> Self {
        Self::with_clock(interval, Box::new(SystemClock))
    }

    pub fn with_clock(interval: Duration, clock: Box<dyn Clock>) -> Self {
        Self {
            interval,
            clock,
            last_request: Mutex::new(None),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Block until the next request may be sent, then mark it as sent.
    pub fn wait(&self) {
        let mut last = self.last_request.lock().unwrap_or_else(|e| e.into_inner());

        let wait_time = match *last {
            Some(last_time) => self
                .interval
                .saturating_sub(self.clock.now().saturating_duration_since(last_time)),
            None => self.interval,
        };

        if !wait_time.is_zero() {
            log::debug!("Rate limit: waiting {:?}", wait_time);
            self.clock.sleep(wait_time);
        }

        *last = Some(self.clock.now());
    }
}

#[cfg(test)]
#[path = "rate_limit_tests.rs"]
mod tests;
