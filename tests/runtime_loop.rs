use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, bail};
use chrono::{TimeZone, Utc};

use typist::clock::{Clock, ManualClock, Timestamp};
use typist::generator::random_phrase::MIN_PHRASE_LENGTH;
use typist::message::Key;
use typist::runtime::{EventSource, ExitRequest, InputEvent, Runtime};
use typist::session::mode::Mode;
use typist::session::{Options, RAGE_QUIT_BANNER, SessionState, init};
use typist::store::total_score;

const KEY_GAP: Duration = Duration::from_millis(120);

enum Step {
    Key(Key),
    Wait(Duration),
}

/// Replays keys and pauses against a manual clock.
struct Script<'a> {
    clock: &'a ManualClock,
    steps: VecDeque<Step>,
}

impl<'a> Script<'a> {
    fn new(clock: &'a ManualClock, steps: Vec<Step>) -> Self {
        Self {
            clock,
            steps: steps.into(),
        }
    }
}

impl EventSource for Script<'_> {
    fn next_event(&mut self, timeout: Duration) -> Result<Option<InputEvent>> {
        match self.steps.pop_front() {
            Some(Step::Key(key)) => {
                self.clock.advance(KEY_GAP);
                Ok(Some(InputEvent::Key(key)))
            }
            Some(Step::Wait(left)) => {
                if left > timeout {
                    self.clock.advance(timeout);
                    self.steps.push_front(Step::Wait(left - timeout));
                } else {
                    self.clock.advance(left);
                }
                Ok(None)
            }
            None => bail!("script ran out of events"),
        }
    }
}

fn typed(text: &str) -> Vec<Step> {
    text.chars()
        .map(|c| Step::Key(if c == ' ' { Key::Space } else { Key::Char(c) }))
        .collect()
}

fn start() -> Timestamp {
    Utc.timestamp_opt(1_700_000_000, 0).unwrap()
}

struct Outcome {
    state: SessionState,
    exit: ExitRequest,
    renders: usize,
}

fn run(options: Options, stats_file: PathBuf, steps: Vec<Step>) -> Outcome {
    let clock = ManualClock::new(start());
    let (state, commands) = init(options, stats_file);
    let mut runtime = Runtime::new(&clock, Script::new(&clock, steps));
    let mut renders = 0;
    let (state, exit) = runtime
        .run(state, commands, |_, now| {
            assert!(now <= clock.now());
            renders += 1;
            Ok(())
        })
        .unwrap();
    Outcome {
        state,
        exit,
        renders,
    }
}

fn words(text: &str) -> Options {
    Options {
        words: vec![text.to_string()],
        ..Options::default()
    }
}

#[test]
fn three_rounds_are_appended_to_stats_file() {
    let dir = tempfile::tempdir().unwrap();
    let stats = dir.path().join("typist.stats");

    let mut steps = Vec::new();
    for _ in 0..3 {
        steps.extend(typed("hi there"));
        steps.push(Step::Key(Key::Enter));
    }
    steps.push(Step::Key(Key::Exit));

    let outcome = run(words("hi there"), stats.clone(), steps);
    assert_eq!(
        outcome.exit,
        ExitRequest {
            status: 0,
            goodbye: String::new()
        }
    );

    let data = fs::read(&stats).unwrap();
    let text = String::from_utf8(data.clone()).unwrap();
    assert_eq!(text.lines().count(), 3);
    assert!(text.ends_with('\n'));
    let replayed = total_score(&data).unwrap();
    assert!((replayed - outcome.state.score).abs() < 1e-6);
    assert!(outcome.state.score > 0.0);
}

#[test]
fn existing_stats_seed_the_score() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.stats");
    let mut steps = Vec::new();
    for _ in 0..3 {
        steps.extend(typed("ok"));
        steps.push(Step::Key(Key::Enter));
    }
    steps.push(Step::Key(Key::Exit));
    let earned = run(words("ok"), first.clone(), steps).state.score;

    let outcome = run(words("ok"), first, vec![Step::Key(Key::Exit)]);
    assert!((outcome.state.score - earned).abs() < 1e-6);
}

#[test]
fn malformed_stats_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let stats = dir.path().join("broken.stats");
    fs::write(&stats, "\n{\"text\": 12}\n").unwrap();

    let outcome = run(words("ok"), stats, vec![Step::Key(Key::Exit)]);
    assert_eq!(outcome.exit.status, 1);
    assert!(outcome.exit.goodbye.contains("line 2"));
}

#[test]
fn codelines_file_starts_at_first_line() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("main.rs");
    fs::write(&source, "fn main() {\n    println!(\"hi\");\n}\n").unwrap();

    let options = Options {
        datafile: Some(source.display().to_string()),
        codelines: true,
        ..Options::default()
    };
    let outcome = run(
        options,
        dir.path().join("stats"),
        vec![Step::Key(Key::ForceNextPhrase), Step::Key(Key::Exit)],
    );
    assert_eq!(outcome.state.phrase.text, "    println!(\"hi\");");
}

#[test]
fn missing_datafile_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let options = Options {
        datafile: Some("/nonexistent/typist/words.txt".to_string()),
        ..Options::default()
    };
    let outcome = run(options, dir.path().join("stats"), Vec::new());
    assert_eq!(outcome.exit.status, 1);
    assert!(outcome.exit.goodbye.contains("/nonexistent/typist/words.txt"));
}

#[test]
fn builtin_dictionary_is_loaded_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let outcome = run(
        Options::default(),
        dir.path().join("stats"),
        vec![Step::Key(Key::Exit)],
    );
    let text = &outcome.state.phrase.text;
    assert!(text.chars().count() >= MIN_PHRASE_LENGTH);
    assert!(text.split(' ').all(|w| w.chars().all(|c| c.is_ascii_lowercase())));
}

#[test]
fn quitting_during_penalty_prints_banner() {
    let dir = tempfile::tempdir().unwrap();
    let mut steps = typed("go");
    steps.push(Step::Key(Key::Enter));
    steps.push(Step::Key(Key::Char('x')));
    steps.push(Step::Key(Key::Exit));

    let outcome = run(words("go"), dir.path().join("stats"), steps);
    assert_eq!(outcome.state.phrase.mode, Mode::Slow);
    assert!(outcome.state.rage_quit);
    assert_eq!(outcome.exit.goodbye, RAGE_QUIT_BANNER);
}

#[test]
fn penalty_expires_while_waiting() {
    let dir = tempfile::tempdir().unwrap();
    let mut steps = typed("go");
    steps.push(Step::Key(Key::Enter));
    steps.push(Step::Key(Key::Char('x')));
    steps.push(Step::Wait(Duration::from_millis(3500)));
    steps.push(Step::Key(Key::Char('g')));
    steps.push(Step::Key(Key::Exit));

    let outcome = run(words("go"), dir.path().join("stats"), steps);
    assert!(!outcome.state.rage_quit);
    assert_eq!(outcome.state.phrase.input, "g");
    assert!(outcome.state.timeouts.is_empty());
    // Periodic ticks and countdown wake-ups each trigger a redraw.
    assert!(outcome.renders >= 14, "only {} renders", outcome.renders);
}
