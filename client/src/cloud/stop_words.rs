//! Stop-word set and token filter

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};

/// Common English words with no value in a word cloud.
const ENGLISH: &[&str] = &[
    // articles & determiners
    "a", "an", "the", "this", "that", "these", "those",
    // be-verbs & auxiliaries
    "is", "are", "was", "were", "be", "been", "being", "am",
    "have", "has", "had", "having", "do", "does", "did", "doing",
    // modals
    "will", "would", "shall", "should", "may", "might", "can", "could", "must",
    // prepositions
    "to", "of", "in", "for", "on", "with", "at", "by", "from", "into", "about",
    "up", "out", "off", "over", "under", "between", "through", "after", "before",
    "above", "below", "during", "against", "again", "further", "onto", "upon",
    "via", "per", "amid", "among",
    // conjunctions
    "and", "or", "but", "nor", "if", "then", "than", "so", "as", "because",
    "while", "until", "although", "though", "whether",
    // pronouns
    "i", "you", "he", "she", "it", "we", "they",
    "me", "him", "her", "us", "them",
    "my", "your", "his", "our", "their", "its",
    "mine", "yours", "hers", "ours", "theirs",
    "myself", "yourself", "himself", "herself", "itself", "ourselves", "themselves",
    // interrogatives & relatives
    "who", "whom", "whose", "what", "which", "when", "where", "how", "why",
    // adverbs & quantifiers
    "very", "also", "just", "too", "more", "most", "only", "own", "same",
    "such", "some", "any", "all", "each", "every", "both", "few", "other",
    "no", "not", "there", "here", "now", "once", "ever", "yet", "still",
    // news boilerplate
    "says", "said", "say", "new", "one", "two", "get", "got",
];

/// Case-insensitive stop-word set, fixed after construction
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// The built-in English list
    pub fn english() -> Self {
        Self::from_words(ENGLISH.iter().copied())
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Parse one word per line; blank lines and `#` comments are ignored.
    pub fn parse(text: &str) -> Self {
        Self::from_words(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read stop words from {}", path.display()))?;
        let stop_words = Self::parse(&text);
        tracing::debug!(
            "Loaded stop words - path={}, words={}",
            path.display(),
            stop_words.len()
        );
        Ok(stop_words)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }
}

fn is_number(token: &str) -> bool {
    token.chars().all(|c| c.is_ascii_digit())
}

/// Trim each token and drop empties, stop words and bare numbers.
///
/// Kept tokens retain their original casing and order.
pub fn filter_tokens<I, S>(tokens: I, stop_words: &StopWords) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .filter_map(|token| {
            let token = token.as_ref().trim();
            if token.is_empty() || stop_words.contains(token) || is_number(token) {
                None
            } else {
                Some(token.to_string())
            }
        })
        .collect()
}
