//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod rss;

pub use self::rss::RssFeedClient;
