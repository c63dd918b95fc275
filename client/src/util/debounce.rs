//! Trailing-edge debounce bookkeeping.
//!
//! Every schedule hands out a ticket and stores the payload captured at that
//! moment; a timer that wakes up with a stale ticket gets nothing. The browser
//! timer lives in the component, this type only decides which wake-up is
//! allowed to fire and with what.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::time::Duration;

/// Quiet period before a live search fires.
pub const LIVE_SEARCH_DELAY: Duration = Duration::from_millis(500);

#[derive(Clone, Debug)]
pub struct Debounce<T> {
    latest: u64,
    pending: Option<T>,
}

impl<T> Default for Debounce<T> {
    fn default() -> Self {
        Self { latest: 0, pending: None }
    }
}

impl<T> Debounce<T> {
    /// Supersede any pending ticket with `payload` and return a fresh ticket.
    pub fn schedule(&mut self, payload: T) -> u64 {
        self.latest = self.latest.wrapping_add(1);
        self.pending = Some(payload);
        self.latest
    }

    /// Invalidate whatever is pending without scheduling anything new.
    pub fn cancel(&mut self) {
        self.latest = self.latest.wrapping_add(1);
        self.pending = None;
    }

    /// A timer holding `ticket` may fire.
    #[must_use]
    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest == ticket
    }

    /// Take the payload for `ticket` if it is still the latest one.
    pub fn fire(&mut self, ticket: u64) -> Option<T> {
        if self.is_current(ticket) { self.pending.take() } else { None }
    }
}
