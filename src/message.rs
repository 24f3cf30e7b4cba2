use crate::error::TypistError;

/// Terminal-independent key vocabulary understood by the reducer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Space,
    Backspace,
    Enter,
    Exit,
    ForceNextPhrase,
    ToggleRepeat,
    ToggleFingers,
}

/// Everything that can be fed into the reducer.
#[derive(Debug)]
pub enum Message {
    Key(Key),
    /// A scheduled wake-up fired; nothing to do beyond pruning and redrawing.
    Interrupt,
    DatasourceLoaded(Vec<u8>),
    StatsLoaded(Vec<u8>),
    Failed(TypistError),
}

impl From<Key> for Message {
    fn from(key: Key) -> Self {
        Message::Key(key)
    }
}

impl From<TypistError> for Message {
    fn from(err: TypistError) -> Self {
        Message::Failed(err)
    }
}
