//! Debounce gate
//!
//! Collapses bursts of calls into a single trailing delivery. The gate owns no
//! timer thread: the event loop asks for [`Debouncer::deadline`] to decide how
//! long to wait and calls [`Debouncer::poll`] when it wakes up.

use std::time::{Duration, Instant};

/// Arguments waiting for their quiet period to elapse
#[derive(Debug, Clone, PartialEq, Eq)]
struct Pending<T> {
    args: T,
    deadline: Instant,
}

/// Trailing-edge debouncer
///
/// Only the arguments of the most recent [`schedule`](Debouncer::schedule)
/// call are delivered, `delay` after that call. Earlier arguments are dropped.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule a delivery of `args`, replacing any pending one
    pub fn schedule(&mut self, args: T, now: Instant) {
        self.pending = Some(Pending {
            args,
            deadline: now + self.delay,
        });
    }

    /// Take the pending arguments if their quiet period has elapsed
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|pending| now >= pending.deadline);

        if due {
            self.pending.take().map(|pending| pending.args)
        } else {
            None
        }
    }

    /// When the pending delivery is due, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
