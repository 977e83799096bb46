//! Frequency-to-size mapping

use crate::cloud::frequency::WordCount;

pub const MIN_WORD_DISPLAY_SIZE: f64 = 10.0;
pub const DEFAULT_MAX_WORD_DISPLAY_SIZE: f64 = 40.0;

/// Display size range; counts are normalized against the highest count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeScale {
    pub min: f64,
    pub max: f64,
}

impl Default for SizeScale {
    fn default() -> Self {
        Self {
            min: MIN_WORD_DISPLAY_SIZE,
            max: DEFAULT_MAX_WORD_DISPLAY_SIZE,
        }
    }
}

impl SizeScale {
    /// A reversed range is swapped so `min <= max` always holds. Non-finite
    /// bounds fall back to the defaults.
    pub fn new(min: f64, max: f64) -> Self {
        let min = if min.is_finite() { min } else { MIN_WORD_DISPLAY_SIZE };
        let max = if max.is_finite() { max } else { DEFAULT_MAX_WORD_DISPLAY_SIZE };
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// `min + (count / max_count) * (max - min)`. Caller guarantees `max_count >= 1`.
    pub fn size_for(&self, count: usize, max_count: usize) -> f64 {
        let ratio = count as f64 / max_count as f64;
        let size = self.min + ratio * (self.max - self.min);
        size.clamp(self.min, self.max)
    }

    /// Size of each word in `words`, in order. Empty input does no division.
    pub fn map_sizes<S: AsRef<str>>(&self, words: &[S], counts: &WordCount) -> Vec<f64> {
        if words.is_empty() {
            return Vec::new();
        }
        let max_count = counts.max().max(1);
        words
            .iter()
            .map(|word| self.size_for(counts.get(word.as_ref()), max_count))
            .collect()
    }
}
