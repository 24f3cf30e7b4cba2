use serde::{Deserialize, Serialize};

use crate::clock::Timestamp;
use crate::session::mode::Mode;
use crate::session::phrase::Typo;

pub const RECORD_VERSION: u32 = 1;

/// One completed round, stored as a single JSON line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatsRecord {
    pub text: String,
    pub started_at: Timestamp,
    pub finished_at: Timestamp,
    pub errors: u32,
    // Records written before typo tracking carry no typos or version.
    #[serde(default)]
    pub typos: Vec<Typo>,
    pub mode: Mode,
    pub seconds: f64,
    pub cps: f64,
    pub wpm: f64,
    #[serde(default)]
    pub version: u32,
}
