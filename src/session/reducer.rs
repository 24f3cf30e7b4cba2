use std::time::Duration;

use crate::clock::{Timestamp, after};
use crate::command::Command;
use crate::engine::scoring;
use crate::error::TypistError;
use crate::generator::dictionary::{parse_code_lines, parse_dictionary};
use crate::generator::random_phrase::MIN_PHRASE_LENGTH;
use crate::generator::{PhraseGenerator, RandomPhrase, SequentialLines};
use crate::message::{Key, Message};
use crate::session::RAGE_QUIT_BANNER;
use crate::session::mode::Mode;
use crate::session::phrase::{
    FAIL_PENALTY_SECONDS, FAST_ERROR_HIGHLIGHT_DURATION, SCORE_HIGHLIGHT_DURATION, Typo,
};
use crate::session::state::{LastScore, SessionState};
use crate::store::{format_record, record_for, total_score};

/// Apply one message at `now`. Pure: all I/O is returned as commands.
pub fn reduce(
    mut state: SessionState,
    msg: Message,
    now: Timestamp,
) -> (SessionState, Vec<Command>) {
    let commands = match msg {
        Message::Key(key) => on_key(&mut state, key, now),
        Message::Interrupt => Vec::new(),
        Message::DatasourceLoaded(data) => on_datasource(&mut state, &data, now),
        Message::StatsLoaded(data) => on_stats(&mut state, &data),
        Message::Failed(err) => vec![Command::exit_with_error(err)],
    };
    state.prune_timeouts(now);
    (state, commands)
}

fn on_key(state: &mut SessionState, key: Key, now: Timestamp) -> Vec<Command> {
    match key {
        Key::Exit => {
            state.exiting = true;
            state.rage_quit = state.phrase.show_fail(now);
            let goodbye = if state.rage_quit {
                RAGE_QUIT_BANNER.to_string()
            } else {
                String::new()
            };
            vec![Command::Exit { status: 0, goodbye }]
        }
        _ if state.phrase.show_fail(now) => Vec::new(),
        Key::ToggleRepeat => {
            state.repeat = !state.repeat;
            Vec::new()
        }
        Key::ToggleFingers => {
            state.hide_fingers = !state.hide_fingers;
            Vec::new()
        }
        Key::ForceNextPhrase => {
            state.reset_phrase(true);
            Vec::new()
        }
        Key::Backspace => {
            state.phrase.input.pop();
            Vec::new()
        }
        Key::Enter => on_enter(state, now),
        Key::Space => {
            on_char(state, ' ', now);
            Vec::new()
        }
        Key::Char(c) => {
            on_char(state, c, now);
            Vec::new()
        }
    }
}

fn on_char(state: &mut SessionState, c: char, now: Timestamp) {
    let expected = state.phrase.expected();
    let mode = state.phrase.mode;
    state.phrase.round_mut().started_at.get_or_insert(now);

    if expected == Some(c) {
        state.phrase.input.push(c);
        return;
    }

    let round = state.phrase.round_mut();
    round.errors += 1;
    if let Some(expected) = expected {
        round.typos.push(Typo { expected, actual: c });
    }
    round.failed_at = Some(now);

    match mode {
        Mode::Fast => {
            state.timeouts.insert(after(now, FAST_ERROR_HIGHLIGHT_DURATION));
        }
        Mode::Slow => {
            state.phrase.input.clear();
            for second in 1..=FAIL_PENALTY_SECONDS {
                state.timeouts.insert(after(now, Duration::from_secs(second)));
            }
        }
        Mode::Normal => state.phrase.input.push(c),
    }
}

fn on_enter(state: &mut SessionState, now: Timestamp) -> Vec<Command> {
    if !state.phrase.is_complete() {
        return Vec::new();
    }

    let round = state.phrase.round_mut();
    round.started_at.get_or_insert(now);
    round.finished_at = Some(now);

    let append = Command::AppendFile {
        path: state.stats_file.clone(),
        data: format_record(&record_for(&state.phrase, now)),
    };

    if state.phrase.mode != Mode::Normal {
        state.phrase.mode = state.phrase.mode.next();
        state.phrase.input.clear();
        return vec![append];
    }

    let value = state.phrase.score();
    let max = scoring::max_score(&state.phrase.text);
    let percent = if max > 0.0 { value / max * 100.0 } else { 0.0 };
    state.last_score = Some(LastScore {
        value,
        percent,
        until: after(now, SCORE_HIGHLIGHT_DURATION),
    });
    state.score += value;
    state.reset_phrase(false);

    vec![
        append,
        Command::ScheduleInterrupt {
            delay: SCORE_HIGHLIGHT_DURATION,
        },
    ]
}

fn on_datasource(state: &mut SessionState, data: &[u8], now: Timestamp) -> Vec<Command> {
    let parsed = if state.codelines {
        parse_code_lines(data)
    } else {
        parse_dictionary(data)
    };
    let entries = match parsed {
        Ok(entries) if entries.is_empty() => {
            return vec![Command::exit_with_error(TypistError::EmptyCorpus)];
        }
        Ok(entries) => entries,
        Err(err) => return vec![Command::exit_with_error(err)],
    };

    if state.codelines {
        state.generator = PhraseGenerator::Sequential(SequentialLines::new(entries));
        state.seed = 0;
    } else {
        state.generator = PhraseGenerator::Random(RandomPhrase::new(
            entries,
            MIN_PHRASE_LENGTH,
            state.number_probability,
        ));
        state.seed = now.timestamp_nanos_opt().unwrap_or_default() as u64;
    }
    state.present_phrase();
    Vec::new()
}

fn on_stats(state: &mut SessionState, data: &[u8]) -> Vec<Command> {
    if data.iter().all(u8::is_ascii_whitespace) {
        return Vec::new();
    }
    match total_score(data) {
        Ok(score) => {
            state.score = score;
            Vec::new()
        }
        Err(err) => vec![Command::exit_with_error(err)],
    }
}
