//! Application layer
//!
//! Contains use cases and service orchestration.

pub mod news_service;
pub mod strip_tags;

pub use news_service::NewsService;
pub use strip_tags::strip_tags;
