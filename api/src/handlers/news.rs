//! News handlers
//!
//! `GET /api/news?source=<name>&count=<n>` proxies an upstream feed as JSON.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Article;
use crate::domain::ports::FeedFetcher;
use crate::error::AppError;
use crate::AppState;

/// Query parameters for GET /api/news
#[derive(Debug, Deserialize)]
pub struct NewsQuery {
    pub source: Option<String>,
    pub count: Option<usize>,
}

/// Response body for GET /api/news
#[derive(Debug, Serialize, Deserialize)]
pub struct NewsResponse {
    pub data: Vec<Article>,
}

#[derive(Debug, Serialize)]
pub struct RootResponse {
    message: &'static str,
}

/// GET /api
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse { message: "ok" })
}

/// GET /api/news
///
/// - missing `source` → 400
/// - unknown source or upstream failure → 500 with plain-text message
pub async fn get_news<F>(
    State(state): State<AppState<F>>,
    Query(query): Query<NewsQuery>,
) -> Result<Json<NewsResponse>, AppError>
where
    F: FeedFetcher + 'static,
{
    let source = query
        .source
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("'source' not specified.".to_string()))?;
    let count = query.count.unwrap_or(state.config.default_count);

    let data = state.news_service.get_news(&source, count).await?;

    Ok(Json(NewsResponse { data }))
}
