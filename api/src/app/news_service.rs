//! News service
//!
//! Resolves a source name to its feed, fetches it and shapes the entries
//! into articles with markup removed.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::app::strip_tags;
use crate::domain::entities::{Article, FeedItem};
use crate::domain::ports::FeedFetcher;
use crate::error::FeedError;

/// Service for serving articles from configured feeds
pub struct NewsService<F>
where
    F: FeedFetcher,
{
    fetcher: Arc<F>,
    sources: BTreeMap<String, String>,
}

impl<F> NewsService<F>
where
    F: FeedFetcher,
{
    pub fn new(fetcher: Arc<F>, sources: BTreeMap<String, String>) -> Self {
        Self { fetcher, sources }
    }

    /// Names of the supported sources
    pub fn source_names(&self) -> impl Iterator<Item = &str> {
        self.sources.keys().map(String::as_str)
    }

    /// Fetch up to `count` articles from `source`.
    ///
    /// Unknown sources fail without touching the network.
    pub async fn get_news(&self, source: &str, count: usize) -> Result<Vec<Article>, FeedError> {
        let source = source.to_lowercase();
        let url = self
            .sources
            .get(&source)
            .ok_or_else(|| FeedError::UnsupportedSource(source.clone()))?;

        tracing::debug!("Getting news - source={}, count={}", source, count);

        let items = self.fetcher.fetch_items(url).await?;
        let articles: Vec<Article> = items.into_iter().take(count).map(to_article).collect();

        tracing::info!(
            "News ready - source={}, articles={}",
            source,
            articles.len()
        );
        Ok(articles)
    }
}

fn to_article(item: FeedItem) -> Article {
    Article {
        title: item.title.as_deref().map(strip_tags),
        description: item.description.as_deref().map(strip_tags),
    }
}
