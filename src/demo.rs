use std::path::PathBuf;
use std::time::Duration;

use chrono::TimeDelta;

use crate::clock::{Timestamp, after};
use crate::generator::{PhraseGenerator, StaticPhrase};
use crate::session::mode::Mode;
use crate::session::state::{LastScore, SessionState};

/// Fixed showcase screen for screenshots. Never reduced.
pub fn demo_state(now: Timestamp) -> SessionState {
    let mut state = SessionState::new(PathBuf::new());
    state.generator = PhraseGenerator::Static(StaticPhrase::new("correct horse battery staple"));
    state.present_phrase();

    state.score = 8938.0;
    state.last_score = Some(LastScore {
        value: 201.0,
        percent: 87.0,
        until: after(now, Duration::from_secs(1)),
    });
    state.hide_fingers = false;

    let phrase = &mut state.phrase;
    phrase.mode = Mode::Normal;
    phrase.input = "correct horse bta".to_string();
    let round = phrase.round_mut();
    round.errors = 2;
    round.started_at = now.checked_sub_signed(TimeDelta::milliseconds(1941));

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::between;
    use chrono::Utc;

    #[test]
    fn test_demo_state() {
        let now = Utc::now();
        let state = demo_state(now);
        assert_eq!(state.phrase.text, "correct horse battery staple");
        assert_eq!(state.phrase.round().errors, 2);
        assert!(state.showing_last_score(now));
        assert_eq!(
            between(state.phrase.round().started_at.unwrap(), now),
            Duration::from_millis(1941)
        );
    }
}
