//! News proxy server
//!
//! Fetches RSS feeds for a fixed set of news sources and serves their
//! articles, with HTML stripped, as JSON for the word-cloud client.
//! Hexagonal (ports & adapters) layout.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::RssFeedClient;
use app::NewsService;
use config::Config;
use domain::ports::FeedFetcher;

/// Application state shared across all handlers
pub struct AppState<F>
where
    F: FeedFetcher,
{
    pub news_service: Arc<NewsService<F>>,
    pub config: Config,
}

impl<F> Clone for AppState<F>
where
    F: FeedFetcher,
{
    fn clone(&self) -> Self {
        Self {
            news_service: self.news_service.clone(),
            config: self.config.clone(),
        }
    }
}

/// Build the HTTP router for any feed fetcher
pub fn build_router<F>(state: AppState<F>) -> Router
where
    F: FeedFetcher + 'static,
{
    Router::new()
        .route("/api", get(handlers::root))
        .route("/api/", get(handlers::root))
        .route("/api/news", get(handlers::get_news::<F>))
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,newscloud_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting news proxy...");

    // Load configuration
    let config = Config::from_env();

    // Create adapters
    let feed_client = Arc::new(
        RssFeedClient::new(Duration::from_secs(config.feed_timeout_secs))
            .context("Failed to build feed HTTP client")?,
    );

    // Create application services
    let news_service = Arc::new(NewsService::new(feed_client, config.sources.clone()));
    tracing::info!(
        "Serving sources: {}",
        news_service.source_names().collect::<Vec<_>>().join(", ")
    );

    let state = AppState {
        news_service,
        config: config.clone(),
    };
    let app = build_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on port: {}", config.port);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
