pub mod dictionary;
pub mod random_phrase;
pub mod sequential;

pub use random_phrase::RandomPhrase;
pub use sequential::SequentialLines;

pub const DEFAULT_PHRASE: &str = "the quick brown fox jumps over the lazy dog";

/// Produces the phrase for a seed together with the seed that follows it.
pub trait TextGenerator {
    fn generate(&self, seed: u64) -> (u64, String);
}

/// Built-in fallback used until a corpus has been loaded.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultPhrase;

impl TextGenerator for DefaultPhrase {
    fn generate(&self, seed: u64) -> (u64, String) {
        (seed, DEFAULT_PHRASE.to_string())
    }
}

/// Always the same text, e.g. from positional command-line words.
#[derive(Clone, Debug)]
pub struct StaticPhrase {
    text: String,
}

impl StaticPhrase {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl TextGenerator for StaticPhrase {
    fn generate(&self, seed: u64) -> (u64, String) {
        (seed, self.text.clone())
    }
}

#[derive(Clone, Debug)]
pub enum PhraseGenerator {
    Default(DefaultPhrase),
    Static(StaticPhrase),
    Random(RandomPhrase),
    Sequential(SequentialLines),
}

impl Default for PhraseGenerator {
    fn default() -> Self {
        PhraseGenerator::Default(DefaultPhrase)
    }
}

impl TextGenerator for PhraseGenerator {
    fn generate(&self, seed: u64) -> (u64, String) {
        match self {
            PhraseGenerator::Default(g) => g.generate(seed),
            PhraseGenerator::Static(g) => g.generate(seed),
            PhraseGenerator::Random(g) => g.generate(seed),
            PhraseGenerator::Sequential(g) => g.generate(seed),
        }
    }
}
