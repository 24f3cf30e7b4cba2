use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

pub const STATS_FILE_NAME: &str = ".gotypist.stats";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub stats_file: Option<String>,
    #[serde(default = "default_number_probability")]
    pub number_probability: f64,
    #[serde(default = "default_hide_fingers")]
    pub hide_fingers: bool,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default)]
    pub log_file: Option<String>,
}

fn default_number_probability() -> f64 {
    0.0
}
fn default_hide_fingers() -> bool {
    true
}
fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stats_file: None,
            number_probability: default_number_probability(),
            hide_fingers: default_hide_fingers(),
            tick_rate_ms: default_tick_rate_ms(),
            log_file: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let mut config: Config = toml::from_str(&content)?;
            config.normalize();
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("typist")
            .join("config.toml")
    }

    /// Clamp values a hand-edited file may get wrong.
    pub fn normalize(&mut self) {
        self.number_probability = clamp_probability(self.number_probability);
        if self.tick_rate_ms == 0 {
            self.tick_rate_ms = default_tick_rate_ms();
        }
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Where completed rounds are appended.
    pub fn stats_path(&self) -> PathBuf {
        resolve_stats_path(
            env::var("STATSFILE").ok(),
            self.stats_file.as_deref(),
            env::var("HOME").ok(),
            dirs::home_dir(),
        )
    }
}

pub fn clamp_probability(p: f64) -> f64 {
    if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }
}

/// `$STATSFILE`, then the config entry, then the stats file in `$HOME`,
/// then in the platform home directory.
pub fn resolve_stats_path(
    env_statsfile: Option<String>,
    configured: Option<&str>,
    env_home: Option<String>,
    home_dir: Option<PathBuf>,
) -> PathBuf {
    if let Some(path) = env_statsfile.filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    if let Some(path) = configured.filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    env_home
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
        .or(home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(STATS_FILE_NAME)
}
