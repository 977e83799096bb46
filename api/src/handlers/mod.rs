//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod news;

pub use news::{get_news, root};
