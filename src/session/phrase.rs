use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::clock::{Timestamp, between};
use crate::engine::scoring;
use crate::session::mode::Mode;

/// Input is ignored for this long after a slow-mode mistake.
pub const FAIL_PENALTY_SECONDS: u64 = 3;
pub const FAIL_PENALTY_DURATION: Duration = Duration::from_secs(FAIL_PENALTY_SECONDS);
pub const FAST_ERROR_HIGHLIGHT_DURATION: Duration = Duration::from_millis(333);
pub const SCORE_HIGHLIGHT_DURATION: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Typo {
    pub expected: char,
    pub actual: char,
}

/// One attempt at a phrase in one mode.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Round {
    pub started_at: Option<Timestamp>,
    pub failed_at: Option<Timestamp>,
    pub finished_at: Option<Timestamp>,
    pub errors: u32,
    pub typos: Vec<Typo>,
}

impl Round {
    pub fn elapsed(&self) -> Duration {
        match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => between(start, end),
            _ => Duration::ZERO,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Phrase {
    pub text: String,
    pub input: String,
    pub rounds: [Round; 3],
    pub mode: Mode,
}

impl Phrase {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn round(&self) -> &Round {
        &self.rounds[self.mode.index()]
    }

    pub fn round_mut(&mut self) -> &mut Round {
        &mut self.rounds[self.mode.index()]
    }

    /// The character that should be typed next, if the phrase is not yet covered.
    pub fn expected(&self) -> Option<char> {
        self.text.chars().nth(self.input.chars().count())
    }

    pub fn is_complete(&self) -> bool {
        self.input == self.text
    }

    /// True while a slow-mode mistake is still blocking input.
    pub fn show_fail(&self, now: Timestamp) -> bool {
        self.mode == Mode::Slow
            && self
                .round()
                .failed_at
                .is_some_and(|failed| between(failed, now) < FAIL_PENALTY_DURATION)
    }

    /// Seconds left on the slow-mode block, counting down from 3 to 1.
    pub fn fail_seconds_left(&self, now: Timestamp) -> u64 {
        match self.round().failed_at {
            Some(failed) if self.show_fail(now) => {
                let left = FAIL_PENALTY_DURATION.saturating_sub(between(failed, now));
                (left.as_secs() + 1).min(FAIL_PENALTY_SECONDS)
            }
            _ => 0,
        }
    }

    /// Fast-mode error counter flashes briefly after each mistake.
    pub fn highlight_errors(&self, now: Timestamp) -> bool {
        self.mode == Mode::Fast
            && self
                .round()
                .failed_at
                .is_some_and(|failed| between(failed, now) < FAST_ERROR_HIGHLIGHT_DURATION)
    }

    /// Length in bytes and chars of the input prefix that matches the text.
    pub fn correct_prefix(&self) -> (usize, usize) {
        let mut bytes = 0;
        let mut chars = 0;
        for (typed, target) in self.input.chars().zip(self.text.chars()) {
            if typed != target {
                break;
            }
            bytes += typed.len_utf8();
            chars += 1;
        }
        (bytes, chars)
    }

    /// Score over all three rounds: speed for fast, accuracy for slow,
    /// a blend of both for normal.
    pub fn score(&self) -> f64 {
        let [fast, slow, normal] = &self.rounds;
        scoring::final_score(
            &self.text,
            scoring::speed_score(&self.text, fast.elapsed()),
            scoring::error_score(&self.text, slow.errors),
            scoring::round_score(&self.text, normal.elapsed(), normal.errors),
        )
    }
}
