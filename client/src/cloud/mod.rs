//! Word-cloud pipeline
//!
//! text → tokenizer → stop-word filter → counts + de-duplication →
//! size and color → `WordInfo` records.

pub mod builder;
pub mod color;
pub mod frequency;
pub mod sentiment;
pub mod size;
pub mod stop_words;
pub mod tokenizer;

pub use builder::{WordCloudBuilder, WordInfo};
pub use color::{ColorMapper, Palette, Rgba};
pub use sentiment::{LexiconScorer, SentimentScorer};
pub use size::SizeScale;
pub use stop_words::StopWords;
