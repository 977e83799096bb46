//! Unified error types for the news proxy
//!
//! - `FeedError`: upstream feed fetch/parse failures and unknown sources
//! - `AppError`: HTTP-facing errors (wraps feed errors for responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Feed layer errors
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Source not supported: {0}")]
    UnsupportedSource(String),

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Bad status code: {0}")]
    BadStatus(u16),

    #[error("FeedParser error: {0}")]
    Parse(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),
}

/// Error bodies are plain text; browser clients show them verbatim.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            AppError::Feed(e) => {
                match &e {
                    FeedError::UnsupportedSource(source) => {
                        tracing::warn!("Unsupported source requested: {}", source)
                    }
                    other => tracing::error!("Feed error: {}", other),
                }
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Something bad happened: {}", e),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_source_message_names_source() {
        let err = FeedError::UnsupportedSource("bbc".to_string());
        assert_eq!(err.to_string(), "Source not supported: bbc");
    }

    #[test]
    fn bad_request_maps_to_400() {
        let response = AppError::BadRequest("'source' not specified.".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn feed_errors_map_to_500() {
        let response = AppError::from(FeedError::BadStatus(503)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = AppError::from(FeedError::Parse("unexpected eof".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
