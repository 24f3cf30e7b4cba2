use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::clock::Timestamp;
use crate::generator::{PhraseGenerator, TextGenerator};
use crate::session::phrase::Phrase;

/// Result of the most recently finished phrase, shown until `until`.
#[derive(Clone, Debug, PartialEq)]
pub struct LastScore {
    pub value: f64,
    /// Share of the phrase's maximum score, 0..=100.
    pub percent: f64,
    pub until: Timestamp,
}

/// The one long-lived value threaded through every reduction.
#[derive(Clone, Debug)]
pub struct SessionState {
    pub codelines: bool,
    pub number_probability: f64,
    pub seed: u64,
    pub generator: PhraseGenerator,
    pub phrase: Phrase,
    /// Wake-ups the session wants; mirrored into real timers by the runtime.
    pub timeouts: BTreeSet<Timestamp>,
    pub hide_fingers: bool,
    pub repeat: bool,
    pub exiting: bool,
    /// Exit was requested while a slow-mode penalty was running.
    pub rage_quit: bool,
    pub stats_file: PathBuf,
    pub score: f64,
    pub last_score: Option<LastScore>,
}

impl SessionState {
    pub fn new(stats_file: PathBuf) -> Self {
        let generator = PhraseGenerator::default();
        let (_, text) = generator.generate(0);
        Self {
            codelines: false,
            number_probability: 0.0,
            seed: 0,
            generator,
            phrase: Phrase::new(text),
            timeouts: BTreeSet::new(),
            hide_fingers: true,
            repeat: false,
            exiting: false,
            rage_quit: false,
            stats_file,
            score: 0.0,
            last_score: None,
        }
    }

    /// Replace the phrase. The seed advances unless repeating, and a forced
    /// reset always advances.
    pub fn reset_phrase(&mut self, force_next: bool) {
        if force_next || !self.repeat {
            let (next, _) = self.generator.generate(self.seed);
            self.seed = next;
        }
        self.present_phrase();
    }

    /// Show the phrase for the current seed without advancing it.
    pub fn present_phrase(&mut self) {
        let (_, text) = self.generator.generate(self.seed);
        self.phrase = Phrase::new(text);
    }

    pub fn showing_last_score(&self, now: Timestamp) -> bool {
        self.last_score.as_ref().is_some_and(|last| now < last.until)
    }

    /// Drop every timeout strictly before `now`.
    pub fn prune_timeouts(&mut self, now: Timestamp) {
        self.timeouts = self.timeouts.split_off(&now);
    }
}
