//! Feed fetcher port trait
//!
//! Defines the interface for retrieving entries from an upstream news feed.

use async_trait::async_trait;

use crate::domain::entities::FeedItem;
use crate::error::FeedError;

/// Port trait for upstream feed access
#[async_trait]
pub trait FeedFetcher: Send + Sync {
    /// Fetch and parse the feed at `url`, returning its entries in feed order
    async fn fetch_items(&self, url: &str) -> Result<Vec<FeedItem>, FeedError>;
}
