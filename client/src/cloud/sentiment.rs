//! Word sentiment scoring
//!
//! `SentimentScorer` is the seam for any scoring backend. The bundled backend
//! is an AFINN-style lexicon: integer scores in `-5..=5`, 0 for unknown words.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{bail, Context, Result};

/// Signed sentiment score for a single word
pub trait SentimentScorer: Send + Sync {
    fn score(&self, word: &str) -> i32;
}

/// Bundled subset of the AFINN lexicon, weighted toward news vocabulary.
const AFINN_SUBSET: &[(&str, i32)] = &[
    ("abandon", -2), ("abandoned", -2), ("abuse", -3), ("abused", -3),
    ("accident", -2), ("accused", -2), ("achievement", 3), ("admire", 3),
    ("afraid", -2), ("aggressive", -2), ("agree", 1), ("alarm", -2),
    ("alarmed", -2), ("amazing", 4), ("anger", -3), ("angry", -3),
    ("anxious", -2), ("apologize", -1), ("arrest", -2), ("arrested", -3),
    ("attack", -1), ("attacked", -1), ("awesome", 4), ("awful", -3),
    ("bad", -3), ("ban", -2), ("banned", -2), ("barrier", -2),
    ("beautiful", 3), ("benefit", 2), ("best", 3), ("better", 2),
    ("blame", -2), ("blamed", -2), ("bless", 2), ("bomb", -1),
    ("boost", 1), ("brave", 2), ("breakthrough", 3), ("brilliant", 4),
    ("broken", -1), ("calm", 2), ("care", 2), ("catastrophe", -3),
    ("celebrate", 3), ("chaos", -2), ("charged", -3), ("cheer", 2),
    ("clash", -2), ("collapse", -2), ("condemn", -2), ("conflict", -2),
    ("confusion", -2), ("corrupt", -3), ("corruption", -3), ("crash", -2),
    ("crime", -3), ("crisis", -3), ("critical", -2), ("cruel", -3),
    ("cut", -1), ("damage", -3), ("danger", -2), ("dangerous", -2),
    ("dead", -3), ("deadly", -3), ("death", -2), ("decry", -3),
    ("defeat", -2), ("delight", 3), ("deny", -2), ("destroy", -3),
    ("destroyed", -3), ("disaster", -2), ("dispute", -2), ("doubt", -1),
    ("easy", 1), ("emergency", -2), ("encourage", 2), ("enjoy", 2),
    ("excellent", 3), ("excited", 3), ("fail", -2), ("failed", -2),
    ("failure", -2), ("fair", 2), ("fake", -3), ("fear", -2),
    ("fears", -2), ("fight", -1), ("fine", 2), ("fraud", -4),
    ("free", 1), ("freedom", 2), ("fun", 4), ("furious", -3),
    ("glad", 3), ("good", 3), ("grant", 1), ("granted", 1),
    ("great", 3), ("grief", -2), ("guilty", -3), ("happy", 3),
    ("harm", -2), ("hate", -3), ("help", 2), ("hero", 2),
    ("heroes", 2), ("hope", 2), ("hopeful", 2), ("horrible", -3),
    ("hostile", -2), ("hurt", -2), ("illegal", -3), ("injured", -2),
    ("injury", -2), ("innocent", 4), ("inspire", 2), ("kill", -3),
    ("killed", -3), ("killing", -3), ("kind", 2), ("lack", -2),
    ("lie", -2), ("lose", -3), ("loss", -3), ("lost", -3),
    ("love", 3), ("lucky", 3), ("mourn", -2), ("murder", -2),
    ("nice", 3), ("nicely", 3), ("outrage", -3), ("panic", -3),
    ("peace", 2), ("positive", 2), ("praise", 3), ("prevent", -1),
    ("protest", -2), ("protesters", -2), ("protests", -2), ("proud", 2),
    ("rescue", 2), ("riot", -2), ("risk", -2), ("safe", 1),
    ("scandal", -3), ("scathing", -2), ("shock", -2), ("shockwaves", -2),
    ("strict", -1), ("strong", 2), ("success", 2), ("successful", 3),
    ("suffer", -2), ("support", 2), ("terrible", -3), ("terror", -3),
    ("terrorism", -2), ("threat", -2), ("threaten", -2), ("tragedy", -2),
    ("tragic", -2), ("trouble", -2), ("united", 1), ("victim", -3),
    ("victory", 3), ("violence", -3), ("war", -2), ("warning", -3),
    ("weak", -2), ("welcome", 2), ("win", 4), ("winner", 4),
    ("wins", 4), ("wonderful", 4), ("worry", -3), ("worst", -3),
    ("wrong", -2),
];

/// Lexicon-backed scorer
#[derive(Debug, Clone, Default)]
pub struct LexiconScorer {
    lexicon: HashMap<String, i32>,
}

impl LexiconScorer {
    /// The bundled AFINN subset
    pub fn afinn() -> Self {
        Self::from_entries(AFINN_SUBSET.iter().map(|&(w, s)| (w, s)))
    }

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, i32)>,
        S: AsRef<str>,
    {
        Self {
            lexicon: entries
                .into_iter()
                .map(|(word, score)| (word.as_ref().to_lowercase(), score))
                .collect(),
        }
    }

    /// Parse AFINN's `word<TAB>score` format; blank lines are skipped.
    pub fn parse_tsv(text: &str) -> Result<Self> {
        let mut entries = Vec::new();
        for (line_no, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let Some((word, score)) = line.rsplit_once('\t') else {
                bail!("line {}: expected `word<TAB>score`", line_no + 1);
            };
            let score: i32 = score
                .trim()
                .parse()
                .with_context(|| format!("line {}: invalid score {:?}", line_no + 1, score))?;
            entries.push((word.trim().to_string(), score));
        }
        Ok(Self::from_entries(entries))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read lexicon from {}", path.display()))?;
        let scorer = Self::parse_tsv(&text)
            .with_context(|| format!("Invalid lexicon in {}", path.display()))?;
        tracing::debug!(
            "Loaded sentiment lexicon - path={}, words={}",
            path.display(),
            scorer.len()
        );
        Ok(scorer)
    }

    pub fn len(&self) -> usize {
        self.lexicon.len()
    }
}

impl SentimentScorer for LexiconScorer {
    /// Whole-word lookup first (covers hyphenated entries), otherwise the sum
    /// of the word's alphanumeric parts.
    fn score(&self, word: &str) -> i32 {
        let word = word.to_lowercase();
        if let Some(&score) = self.lexicon.get(&word) {
            return score;
        }
        word.split(|c: char| !c.is_alphanumeric())
            .filter(|part| !part.is_empty())
            .filter_map(|part| self.lexicon.get(part).copied())
            .fold(0i32, i32::saturating_add)
    }
}
