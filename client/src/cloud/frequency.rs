//! Frequency counting and case-insensitive de-duplication

use std::collections::{HashMap, HashSet};

/// Occurrence counts keyed by lower-cased word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCount {
    counts: HashMap<String, usize>,
}

impl WordCount {
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut counts = HashMap::new();
        for token in tokens {
            *counts.entry(token.as_ref().to_lowercase()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Count for `word` regardless of its casing; 0 if never seen
    pub fn get(&self, word: &str) -> usize {
        self.counts.get(&word.to_lowercase()).copied().unwrap_or(0)
    }

    /// Highest count, or 0 when empty
    pub fn max(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }
}

/// One entry per distinct lower-cased word, in first-seen order, using the
/// casing of the first occurrence.
pub fn dedupe<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    tokens
        .iter()
        .map(|token| token.as_ref())
        .filter(|token| seen.insert(token.to_lowercase()))
        .map(str::to_string)
        .collect()
}
