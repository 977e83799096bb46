//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.
//! They record calls so tests can verify behavior.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::domain::entities::FeedItem;
use crate::domain::ports::FeedFetcher;
use crate::error::FeedError;

// ============================================================================
// Mock Feed Fetcher
// ============================================================================

#[derive(Debug, Clone)]
enum Failure {
    Status(u16),
    Parse(String),
}

#[derive(Default)]
pub struct MockFeedFetcher {
    items: Vec<FeedItem>,
    failure: Option<Failure>,
    requested: Arc<RwLock<Vec<String>>>,
}

impl MockFeedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve these items for every URL
    pub fn with_items(mut self, items: Vec<FeedItem>) -> Self {
        self.items = items;
        self
    }

    /// Fail every fetch as if upstream answered with `status`
    pub fn failing_with_status(mut self, status: u16) -> Self {
        self.failure = Some(Failure::Status(status));
        self
    }

    /// Fail every fetch with a parse error
    pub fn failing_with_parse(mut self, message: &str) -> Self {
        self.failure = Some(Failure::Parse(message.to_string()));
        self
    }

    /// URLs fetched so far, in call order
    pub fn requested_urls(&self) -> Vec<String> {
        self.requested.read().unwrap().clone()
    }
}

#[async_trait]
impl FeedFetcher for MockFeedFetcher {
    async fn fetch_items(&self, url: &str) -> Result<Vec<FeedItem>, FeedError> {
        self.requested.write().unwrap().push(url.to_string());

        match &self.failure {
            Some(Failure::Status(status)) => Err(FeedError::BadStatus(*status)),
            Some(Failure::Parse(message)) => Err(FeedError::Parse(message.clone())),
            None => Ok(self.items.clone()),
        }
    }
}
