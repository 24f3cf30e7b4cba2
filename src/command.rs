//! Side effects described as data. The reducer returns these; the effect
//! runner in [`crate::runtime`] is the only place they are carried out.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::message::Message;

/// Where a read comes from. `-` on the command line means standard input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileSource {
    Stdin,
    Path(PathBuf),
}

impl From<&str> for FileSource {
    fn from(arg: &str) -> Self {
        if arg == "-" {
            FileSource::Stdin
        } else {
            FileSource::Path(PathBuf::from(arg))
        }
    }
}

impl From<PathBuf> for FileSource {
    fn from(path: PathBuf) -> Self {
        FileSource::Path(path)
    }
}

impl fmt::Display for FileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileSource::Stdin => f.write_str("<stdin>"),
            FileSource::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// What the bytes of a successful read mean to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadPurpose {
    Datasource,
    Stats,
}

impl ReadPurpose {
    pub fn loaded(self, data: Vec<u8>) -> Message {
        match self {
            ReadPurpose::Datasource => Message::DatasourceLoaded(data),
            ReadPurpose::Stats => Message::StatsLoaded(data),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OnError {
    /// Turn the failure into a `Message::Failed`.
    Report,
    /// Drop the failure without producing a message.
    Ignore,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    ReadFile {
        source: FileSource,
        purpose: ReadPurpose,
        on_error: OnError,
    },
    /// Answered with `DatasourceLoaded` carrying the embedded word list.
    LoadBuiltinDictionary,
    /// Create-or-append; failures are always reported.
    AppendFile { path: PathBuf, data: Vec<u8> },
    /// One-shot wake-up after `delay`, carrying no payload.
    ScheduleInterrupt { delay: Duration },
    /// Recurring wake-up driving the baseline redraw cadence.
    SchedulePeriodicInterrupt { period: Duration },
    /// Release the terminal, print `goodbye` if non-empty and exit with `status`.
    Exit { status: i32, goodbye: String },
}

impl Command {
    pub fn exit_with_error(err: impl fmt::Display) -> Self {
        Command::Exit {
            status: 1,
            goodbye: err.to_string(),
        }
    }
}
