use std::collections::BTreeSet;
use std::time::Duration;

use crate::clock::{Timestamp, between};

/// Changes needed to bring the externally scheduled wake-ups in line with
/// the session's desired timeouts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimerPlan {
    pub cancel: Vec<Timestamp>,
    pub schedule: Vec<(Timestamp, Duration)>,
}

impl TimerPlan {
    pub fn is_empty(&self) -> bool {
        self.cancel.is_empty() && self.schedule.is_empty()
    }
}

/// Mirror of what has been handed to the wake-up scheduler so far.
#[derive(Clone, Debug, Default)]
pub struct TimerReconciler {
    scheduled: BTreeSet<Timestamp>,
}

impl TimerReconciler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scheduled(&self) -> &BTreeSet<Timestamp> {
        &self.scheduled
    }

    /// Diff `desired` against the scheduled set. Afterwards the scheduled set
    /// equals `desired`, so a repeated call with the same input plans nothing.
    pub fn reconcile(&mut self, desired: &BTreeSet<Timestamp>, now: Timestamp) -> TimerPlan {
        let cancel: Vec<Timestamp> = self.scheduled.difference(desired).copied().collect();
        let schedule: Vec<(Timestamp, Duration)> = desired
            .difference(&self.scheduled)
            .map(|&at| (at, between(now, at)))
            .collect();

        self.scheduled.clone_from(desired);

        TimerPlan { cancel, schedule }
    }
}
