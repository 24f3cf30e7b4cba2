use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::generator::TextGenerator;

pub const MIN_PHRASE_LENGTH: usize = 30;

const NUMBER_UPPER_BOUND: u32 = 10_000;

/// Draws words from a pool until the phrase is long enough, optionally
/// swapping some words for random numbers.
#[derive(Clone, Debug)]
pub struct RandomPhrase {
    words: Arc<[String]>,
    min_length: usize,
    number_probability: f64,
}

impl RandomPhrase {
    /// `words` must not be empty; callers validate the corpus first.
    pub fn new(words: Vec<String>, min_length: usize, number_probability: f64) -> Self {
        let number_probability = if number_probability.is_nan() {
            0.0
        } else {
            number_probability.clamp(0.0, 1.0)
        };
        Self {
            words: words.into(),
            min_length,
            number_probability,
        }
    }

    fn draw(&self, rng: &mut SmallRng) -> String {
        if rng.gen_bool(self.number_probability) {
            rng.gen_range(0..NUMBER_UPPER_BOUND).to_string()
        } else {
            self.words[rng.gen_range(0..self.words.len())].clone()
        }
    }
}

impl TextGenerator for RandomPhrase {
    fn generate(&self, seed: u64) -> (u64, String) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut phrase: Vec<String> = Vec::new();
        // Each word adds its length plus one separator; the first has none.
        let mut length: isize = -1;

        while length < self.min_length as isize {
            let word = self.draw(&mut rng);
            length += 1 + word.chars().count() as isize;
            phrase.push(word);
        }

        (rng.next_u64(), phrase.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> Vec<String> {
        ["alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf"]
            .iter()
            .map(|w| w.to_string())
            .collect()
    }

    #[test]
    fn test_same_seed_same_phrase() {
        let generator = RandomPhrase::new(pool(), MIN_PHRASE_LENGTH, 0.0);
        assert_eq!(generator.generate(42), generator.generate(42));
    }

    #[test]
    fn test_reaches_minimum_length() {
        let generator = RandomPhrase::new(pool(), MIN_PHRASE_LENGTH, 0.0);
        let mut seed = 1;
        for _ in 0..50 {
            let (next, text) = generator.generate(seed);
            assert!(text.chars().count() >= MIN_PHRASE_LENGTH, "{text:?}");
            assert!(text.split(' ').all(|w| pool().contains(&w.to_string())));
            seed = next;
        }
    }

    #[test]
    fn test_advances_seed() {
        let generator = RandomPhrase::new(pool(), MIN_PHRASE_LENGTH, 0.0);
        let (next, first) = generator.generate(7);
        assert_ne!(next, 7);
        let (_, second) = generator.generate(next);
        assert_ne!(first, second);
    }

    #[test]
    fn test_number_probability_one_yields_only_numbers() {
        let generator = RandomPhrase::new(pool(), MIN_PHRASE_LENGTH, 1.0);
        let (_, text) = generator.generate(99);
        assert!(
            text.split(' ')
                .all(|w| w.parse::<u32>().is_ok_and(|n| n < NUMBER_UPPER_BOUND))
        );
    }

    #[test]
    fn test_probability_is_clamped() {
        let generator = RandomPhrase::new(pool(), MIN_PHRASE_LENGTH, 7.5);
        let (_, text) = generator.generate(1);
        assert!(!text.is_empty());
    }
}
