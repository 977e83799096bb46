//! Domain entities

pub mod article;

pub use article::{Article, FeedItem};
