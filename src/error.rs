use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TypistError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },

    #[error("failed to append to {path}: {source}")]
    Append { path: String, source: io::Error },

    #[error("datafile is not valid UTF-8")]
    NotUtf8,

    #[error("datafile contains no usable data")]
    EmptyCorpus,

    #[error("malformed stats record on line {line}: {source}")]
    StatsRecord {
        line: usize,
        source: serde_json::Error,
    },

    #[error("built-in dictionary is missing from this build")]
    MissingBuiltinDictionary,
}

pub type Result<T> = std::result::Result<T, TypistError>;
