//! Article payloads
//!
//! The `{ "data": [{ "title", "description" }] }` shape served by the news
//! proxy and used for local and bundled article files.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Payload compiled into the binary for offline runs
const BUNDLED_SAMPLE: &str = include_str!("../data/sample_news.json");

/// An article as delivered by the proxy; either field may be null or absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawArticle {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl RawArticle {
    pub fn new(title: Option<&str>, description: Option<&str>) -> Self {
        Self {
            title: title.map(str::to_string),
            description: description.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsPayload {
    pub data: Vec<RawArticle>,
}

impl NewsPayload {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Malformed news payload")
    }

    pub async fn load(path: &Path) -> Result<Self> {
        let json = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json_str(&json).with_context(|| format!("Invalid articles in {}", path.display()))
    }

    pub fn bundled_sample() -> Result<Self> {
        Self::from_json_str(BUNDLED_SAMPLE)
    }
}
