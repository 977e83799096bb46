use std::env;
use std::path::PathBuf;

use crate::cloud::color::{Palette, Rgba, DEFAULT_SENTIMENT_DIVISOR};
use crate::cloud::size::{SizeScale, DEFAULT_MAX_WORD_DISPLAY_SIZE, MIN_WORD_DISPLAY_SIZE};
use crate::layout::Canvas;

#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the news proxy
    pub api_url: String,
    /// Articles requested per source
    pub count: usize,
    pub scale: SizeScale,
    pub palette: Palette,
    pub canvas: Canvas,
    /// Replaces the built-in stop words when set
    pub stop_words_file: Option<PathBuf>,
    /// Replaces the bundled sentiment lexicon when set
    pub sentiment_lexicon: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:5000".to_string(),
            count: 10,
            scale: SizeScale::default(),
            palette: Palette::default(),
            canvas: Canvas::default(),
            stop_words_file: None,
            sentiment_lexicon: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parsed = |key: &str| {
            lookup(key)
                .and_then(|v| v.trim().parse::<f64>().ok())
                .filter(|v| v.is_finite())
        };
        let color = |key: &str, fallback: Rgba| match lookup(key) {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("Ignoring {}: {}", key, e);
                fallback
            }),
            None => fallback,
        };

        let divisor = parsed("CLOUD_SENTIMENT_DIVISOR")
            .filter(|d| *d > 0.0)
            .unwrap_or(DEFAULT_SENTIMENT_DIVISOR);

        Self {
            api_url: lookup("NEWS_API_URL").unwrap_or(defaults.api_url),
            count: lookup("NEWS_COUNT")
                .and_then(|c| c.parse().ok())
                .unwrap_or(defaults.count),
            scale: SizeScale::new(
                parsed("CLOUD_MIN_WORD_SIZE").unwrap_or(MIN_WORD_DISPLAY_SIZE),
                parsed("CLOUD_MAX_WORD_SIZE").unwrap_or(DEFAULT_MAX_WORD_DISPLAY_SIZE),
            ),
            palette: Palette {
                neutral: color("CLOUD_COLOR_NEUTRAL", defaults.palette.neutral),
                negative: color("CLOUD_COLOR_NEGATIVE", defaults.palette.negative),
                positive: color("CLOUD_COLOR_POSITIVE", defaults.palette.positive),
                divisor,
            },
            canvas: Canvas {
                width: lookup("CLOUD_CANVAS_WIDTH")
                    .and_then(|w| w.parse().ok())
                    .unwrap_or(defaults.canvas.width),
                height: lookup("CLOUD_CANVAS_HEIGHT")
                    .and_then(|h| h.parse().ok())
                    .unwrap_or(defaults.canvas.height),
            },
            stop_words_file: lookup("CLOUD_STOP_WORDS_FILE").map(PathBuf::from),
            sentiment_lexicon: lookup("CLOUD_SENTIMENT_LEXICON").map(PathBuf::from),
        }
    }
}
