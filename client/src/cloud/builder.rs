//! Word-info builder
//!
//! Runs the whole pipeline over an article collection: tokenize and filter
//! every title then description, count, de-duplicate, then size and color
//! each surviving word.

use serde::Serialize;

use crate::articles::RawArticle;
use crate::cloud::color::{ColorMapper, Rgba};
use crate::cloud::frequency::{dedupe, WordCount};
use crate::cloud::sentiment::SentimentScorer;
use crate::cloud::size::SizeScale;
use crate::cloud::stop_words::{filter_tokens, StopWords};
use crate::cloud::tokenizer::tokenize;

/// Per-word display record handed to the layout engine
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordInfo {
    /// Casing of the first occurrence
    pub text: String,
    pub size: f64,
    pub color: Rgba,
}

/// Immutable pipeline configuration; safe to share between concurrent runs.
pub struct WordCloudBuilder<S>
where
    S: SentimentScorer,
{
    stop_words: StopWords,
    scale: SizeScale,
    colors: ColorMapper<S>,
}

impl<S> WordCloudBuilder<S>
where
    S: SentimentScorer,
{
    pub fn new(stop_words: StopWords, scale: SizeScale, colors: ColorMapper<S>) -> Self {
        Self {
            stop_words,
            scale,
            colors,
        }
    }

    /// Filtered words of one text field; `None` contributes nothing.
    pub fn words_of(&self, text: Option<&str>) -> Vec<String> {
        tokenize(text)
            .map(|tokens| filter_tokens(tokens, &self.stop_words))
            .unwrap_or_default()
    }

    /// Filtered words of every article, title before description.
    pub fn words(&self, articles: &[RawArticle]) -> Vec<String> {
        articles
            .iter()
            .flat_map(|article| {
                let mut words = self.words_of(article.title.as_deref());
                words.extend(self.words_of(article.description.as_deref()));
                words
            })
            .collect()
    }

    /// Word infos for an already filtered word sequence
    pub fn build_from_words(&self, words: &[String]) -> Vec<WordInfo> {
        let counts = WordCount::from_tokens(words);
        let unique = dedupe(words);
        let sizes = self.scale.map_sizes(&unique, &counts);

        unique
            .into_iter()
            .zip(sizes)
            .map(|(text, size)| {
                let color = self.colors.color_of(&text);
                WordInfo { text, size, color }
            })
            .collect()
    }

    pub fn build(&self, articles: &[RawArticle]) -> Vec<WordInfo> {
        let words = self.words(articles);
        let infos = self.build_from_words(&words);
        tracing::debug!(
            "Built word infos - articles={}, words={}, unique={}",
            articles.len(),
            words.len(),
            infos.len()
        );
        infos
    }
}
