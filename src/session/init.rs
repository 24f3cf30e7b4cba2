use std::path::PathBuf;
use std::time::Duration;

use crate::command::{Command, FileSource, OnError, ReadPurpose};
use crate::generator::{PhraseGenerator, StaticPhrase};
use crate::session::state::SessionState;

pub const DEFAULT_TICK_RATE: Duration = Duration::from_millis(250);

/// Startup choices gathered from the command line and config file.
#[derive(Clone, Debug)]
pub struct Options {
    /// Positional words; when present they are the only phrase.
    pub words: Vec<String>,
    /// Word or code source, `-` for stdin. Falls back to the built-in list.
    pub datafile: Option<String>,
    pub codelines: bool,
    pub number_probability: f64,
    pub hide_fingers: bool,
    pub tick_rate: Duration,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            words: Vec::new(),
            datafile: None,
            codelines: false,
            number_probability: 0.0,
            hide_fingers: true,
            tick_rate: DEFAULT_TICK_RATE,
        }
    }
}

/// Initial session plus the commands that load its data.
pub fn init(options: Options, stats_file: PathBuf) -> (SessionState, Vec<Command>) {
    let mut state = SessionState::new(stats_file.clone());
    state.codelines = options.codelines;
    state.number_probability = options.number_probability;
    state.hide_fingers = options.hide_fingers;

    let mut commands = Vec::new();
    if !options.words.is_empty() {
        state.generator = PhraseGenerator::Static(StaticPhrase::new(options.words.join(" ")));
        state.present_phrase();
    } else if let Some(datafile) = options.datafile.as_deref() {
        commands.push(Command::ReadFile {
            source: FileSource::from(datafile),
            purpose: ReadPurpose::Datasource,
            on_error: OnError::Report,
        });
    } else {
        commands.push(Command::LoadBuiltinDictionary);
    }

    commands.push(Command::ReadFile {
        source: FileSource::Path(stats_file),
        purpose: ReadPurpose::Stats,
        on_error: OnError::Ignore,
    });
    commands.push(Command::SchedulePeriodicInterrupt {
        period: options.tick_rate,
    });

    (state, commands)
}
