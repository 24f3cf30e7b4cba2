use rust_embed::Embed;

use crate::error::{Result, TypistError};

#[derive(Embed)]
#[folder = "assets/"]
struct Assets;

const BUILTIN_WORDS: &str = "words.txt";

/// Words longer than this are dropped from dictionaries.
pub const MAX_WORD_LENGTH: usize = 7;

/// Raw bytes of the word list compiled into the binary.
pub fn builtin_words() -> Result<Vec<u8>> {
    Assets::get(BUILTIN_WORDS)
        .map(|file| file.data.into_owned())
        .ok_or(TypistError::MissingBuiltinDictionary)
}

fn decode(data: &[u8]) -> Result<&str> {
    std::str::from_utf8(data).map_err(|_| TypistError::NotUtf8)
}

fn is_practice_word(word: &str) -> bool {
    !word.is_empty()
        && word.len() <= MAX_WORD_LENGTH
        && word.chars().all(|c| c.is_ascii_lowercase())
}

/// Keep trimmed lowercase ASCII words of at most seven letters.
pub fn parse_dictionary(data: &[u8]) -> Result<Vec<String>> {
    Ok(decode(data)?
        .lines()
        .map(str::trim)
        .filter(|w| is_practice_word(w))
        .map(str::to_string)
        .collect())
}

/// Keep every non-blank line with trailing whitespace removed; leading
/// indentation is part of what gets typed.
pub fn parse_code_lines(data: &[u8]) -> Result<Vec<String>> {
    Ok(decode(data)?
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}
