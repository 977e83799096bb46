//! Sentiment-driven word color
//!
//! Colors interpolate linearly from a neutral anchor toward a positive or
//! negative anchor, by the word's score over a clamp divisor.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::cloud::sentiment::SentimentScorer;

pub const DEFAULT_SENTIMENT_DIVISOR: f64 = 5.0;

/// Four 8-bit channels. Serialized as `#rrggbbaa`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Per-channel `self + t * (target - self)`, rounded; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, target: Rgba, t: f64) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let channel = |from: u8, to: u8| -> u8 {
            let value = f64::from(from) + t * (f64::from(to) - f64::from(from));
            value.round().clamp(0.0, 255.0) as u8
        };
        Rgba {
            r: channel(self.r, target.r),
            g: channel(self.g, target.g),
            b: channel(self.b, target.b),
            a: channel(self.a, target.a),
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }

    /// CSS `rgba(...)` with alpha as a 0..1 fraction
    pub fn to_css(self) -> String {
        let alpha = (f64::from(self.a) / 255.0 * 100.0).round() / 100.0;
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color {0:?}: expected #rrggbb or #rrggbbaa")]
pub struct ParseColorError(String);

impl FromStr for Rgba {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_string());
        let hex = s.trim().trim_start_matches('#');
        if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
            return Err(err());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Rgba::new(channel(0)?, channel(2)?, channel(4)?, a))
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Anchor colors and the score divisor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub neutral: Rgba,
    pub negative: Rgba,
    pub positive: Rgba,
    pub divisor: f64,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            // translucent black
            neutral: Rgba::new(0, 0, 0, 179),
            negative: Rgba::new(255, 0, 0, 255),
            positive: Rgba::new(0, 255, 0, 255),
            divisor: DEFAULT_SENTIMENT_DIVISOR,
        }
    }
}

impl Palette {
    pub fn color_for_score(&self, score: i32) -> Rgba {
        let magnitude = f64::from(score.unsigned_abs()) / self.divisor;
        match score.signum() {
            0 => self.neutral,
            -1 => self.neutral.lerp(self.negative, magnitude),
            _ => self.neutral.lerp(self.positive, magnitude),
        }
    }
}

/// Maps a word to its color. Depends only on the word text.
pub struct ColorMapper<S>
where
    S: SentimentScorer,
{
    scorer: S,
    palette: Palette,
}

impl<S> ColorMapper<S>
where
    S: SentimentScorer,
{
    pub fn new(scorer: S, palette: Palette) -> Self {
        Self { scorer, palette }
    }

    pub fn color_of(&self, word: &str) -> Rgba {
        self.palette.color_for_score(self.scorer.score(word))
    }
}
