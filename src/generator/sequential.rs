use std::sync::Arc;

use crate::generator::TextGenerator;

/// Steps through a fixed list of lines, wrapping around at the end.
#[derive(Clone, Debug)]
pub struct SequentialLines {
    lines: Arc<[String]>,
}

impl SequentialLines {
    /// `lines` must not be empty; callers validate the corpus first.
    pub fn new(lines: Vec<String>) -> Self {
        Self {
            lines: lines.into(),
        }
    }
}

impl TextGenerator for SequentialLines {
    fn generate(&self, seed: u64) -> (u64, String) {
        let len = self.lines.len() as u64;
        let idx = seed % len;
        (seed.wrapping_add(1) % len, self.lines[idx as usize].clone())
    }
}
