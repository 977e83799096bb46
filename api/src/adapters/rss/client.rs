//! RSS feed client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use rss::Channel;

use crate::domain::entities::FeedItem;
use crate::domain::ports::FeedFetcher;
use crate::error::FeedError;

/// Implementation of the feed fetcher over HTTP + RSS
pub struct RssFeedClient {
    http: Client,
}

impl RssFeedClient {
    pub fn new(timeout: Duration) -> Result<Self, FeedError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl FeedFetcher for RssFeedClient {
    async fn fetch_items(&self, url: &str) -> Result<Vec<FeedItem>, FeedError> {
        let start = std::time::Instant::now();
        tracing::debug!("Fetching feed - url={}", url);

        let response = self.http.get(url).send().await.map_err(|e| {
            tracing::error!("Request error: {}", e);
            FeedError::from(e)
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FeedError::BadStatus(status.as_u16()));
        }

        let body = response.bytes().await?;
        let items = parse_feed(&body)?;

        tracing::info!(
            "Feed fetch completed - url={}, duration={:.2}s, items={}",
            url,
            start.elapsed().as_secs_f32(),
            items.len()
        );
        Ok(items)
    }
}

/// Parse an RSS document into feed items, preserving feed order
pub fn parse_feed(body: &[u8]) -> Result<Vec<FeedItem>, FeedError> {
    let channel = Channel::read_from(body).map_err(|e| FeedError::Parse(e.to_string()))?;

    Ok(channel
        .items()
        .iter()
        .map(|item| FeedItem {
            title: item.title().map(str::to_string),
            description: item.description().map(str::to_string),
        })
        .collect())
}
