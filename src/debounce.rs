//! Debounced Search Trigger
//!
//! Translates a rapid stream of text edits into a single delayed fetch.
//! Each new edit cancels the previously armed trigger and arms a fresh one
//! capturing the full term at that moment, so at most one trigger is ever
//! outstanding and only the latest term can fire.
//!
//! The owner's event loop supplies the clock: call [`Debouncer::poll`] on
//! every tick and act on the term it yields. Dropping the debouncer (or
//! calling [`Debouncer::cancel`]) guarantees the trigger never fires.

use std::time::{Duration, Instant};

/// Default quiet period before a search goes out
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

/// One armed trigger: the captured term and when it is due.
#[derive(Debug, Clone)]
struct Pending {
    term: String,
    due: Instant,
}

/// Cancel-and-replace delayed trigger for search terms.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<Pending>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// The configured quiet period
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arm a trigger for `term`, replacing any previously armed trigger.
    ///
    /// The replaced trigger is cancelled before the new one is armed; it can
    /// never fire afterwards. The term is captured by value, including the
    /// empty string.
    pub fn schedule(&mut self, term: impl Into<String>, now: Instant) {
        self.pending = Some(Pending {
            term: term.into(),
            due: now + self.delay,
        });
    }

    /// Drop the armed trigger, if any. Used on teardown and explicit resets.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Whether a trigger is currently armed
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left until the armed trigger is due, `None` when nothing is
    /// armed. Zero once the deadline has passed. Event loops use this to
    /// size their poll timeout instead of spinning.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|p| p.due.saturating_duration_since(now))
    }

    /// Yield the captured term if the armed trigger is due, disarming it.
    ///
    /// Returns `None` while the quiet period is still running or when no
    /// trigger is armed. A term is yielded at most once.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some(p) if now >= p.due => self.pending.take().map(|p| p.term),
            _ => None,
        }
    }
}
