//! HTTP client for the news proxy

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};

use crate::articles::NewsPayload;

/// HTTP client for communicating with the news proxy
#[derive(Clone)]
pub struct NewsClient {
    client: reqwest::Client,
    base_url: String,
}

impl NewsClient {
    /// Create a new client for the proxy at `base_url`
    pub fn new(base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch up to `count` articles for `source`
    pub async fn fetch_news(&self, source: &str, count: usize) -> Result<NewsPayload> {
        let body = self.get_text(&news_path(source, count)).await?;
        NewsPayload::from_json_str(&body)
            .with_context(|| format!("Unexpected response for source {}", source))
    }

    // --- Internal helpers ---

    async fn get_text(&self, path: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to GET {}", path))?;

        handle_text_response(response).await
    }
}

fn news_path(source: &str, count: usize) -> String {
    format!(
        "/api/news?source={}&count={}",
        urlencoding::encode(source),
        count
    )
}

async fn handle_text_response(response: reqwest::Response) -> Result<String> {
    let status = response.status();
    let body = response
        .text()
        .await
        .context("Failed to read response body")?;

    if !status.is_success() {
        anyhow::bail!("API error ({}): {}", status, body);
    }

    Ok(body)
}
