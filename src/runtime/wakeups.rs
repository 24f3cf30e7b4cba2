use std::collections::BTreeSet;
use std::time::Duration;

use crate::clock::{Timestamp, after, between};

/// Pending real-world wake-ups: one-shot deadlines plus an optional
/// recurring tick. Firing carries no payload; the loop just re-polls.
#[derive(Clone, Debug, Default)]
pub struct WakeQueue {
    once: BTreeSet<Timestamp>,
    periodic: Option<Periodic>,
}

#[derive(Clone, Copy, Debug)]
struct Periodic {
    period: Duration,
    next: Timestamp,
}

impl WakeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, at: Timestamp) {
        self.once.insert(at);
    }

    /// Cancelling something already fired or never scheduled is a no-op.
    pub fn cancel(&mut self, at: Timestamp) {
        self.once.remove(&at);
    }

    pub fn set_periodic(&mut self, period: Duration, now: Timestamp) {
        if period.is_zero() {
            self.periodic = None;
            return;
        }
        self.periodic = Some(Periodic {
            period,
            next: after(now, period),
        });
    }

    pub fn next_deadline(&self) -> Option<Timestamp> {
        let once = self.once.first().copied();
        let tick = self.periodic.map(|p| p.next);
        match (once, tick) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// How long the loop may block before something is due.
    pub fn timeout(&self, now: Timestamp) -> Option<Duration> {
        self.next_deadline().map(|at| between(now, at))
    }

    /// Remove everything due at `now`. Several due wake-ups coalesce into
    /// one; a late periodic tick skips ahead instead of bursting.
    pub fn pop_due(&mut self, now: Timestamp) -> bool {
        let later = self.once.split_off(&after(now, Duration::from_nanos(1)));
        let mut fired = !self.once.is_empty();
        self.once = later;

        if let Some(periodic) = self.periodic.as_mut() {
            if periodic.next <= now {
                periodic.next = after(now, periodic.period);
                fired = true;
            }
        }
        fired
    }

    pub fn pending(&self) -> usize {
        self.once.len()
    }
}
