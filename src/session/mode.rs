use serde::{Deserialize, Serialize};

/// Display accent for a mode. The core only passes it through; the UI picks colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Green,
    Magenta,
    Yellow,
}

/// Practice modes, in the order a phrase goes through them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Mode {
    #[default]
    Fast,
    Slow,
    Normal,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Fast, Mode::Slow, Mode::Normal];

    pub fn index(self) -> usize {
        match self {
            Mode::Fast => 0,
            Mode::Slow => 1,
            Mode::Normal => 2,
        }
    }

    /// The following mode; Normal is terminal and maps to itself.
    pub fn next(self) -> Mode {
        match self {
            Mode::Fast => Mode::Slow,
            Mode::Slow | Mode::Normal => Mode::Normal,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Fast => "fast",
            Mode::Slow => "slow",
            Mode::Normal => "normal",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Mode::Fast => "type as fast as you can, ignore mistakes",
            Mode::Slow => "go slow, do not make any mistake",
            Mode::Normal => "type at normal speed, avoid mistakes",
        }
    }

    pub fn accent(self) -> Accent {
        match self {
            Mode::Fast => Accent::Green,
            Mode::Slow => Accent::Magenta,
            Mode::Normal => Accent::Yellow,
        }
    }
}

impl From<Mode> for u8 {
    fn from(mode: Mode) -> u8 {
        mode.index() as u8
    }
}

impl TryFrom<u8> for Mode {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Mode::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| format!("unknown mode {value}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_order() {
        assert_eq!(Mode::Fast.next(), Mode::Slow);
        assert_eq!(Mode::Slow.next(), Mode::Normal);
        assert_eq!(Mode::Normal.next(), Mode::Normal);
        assert!(Mode::Fast < Mode::Slow && Mode::Slow < Mode::Normal);
    }

    #[test]
    fn test_mode_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Mode::Slow).unwrap(), "1");
        let mode: Mode = serde_json::from_str("2").unwrap();
        assert_eq!(mode, Mode::Normal);
        assert!(serde_json::from_str::<Mode>("3").is_err());
    }
}
