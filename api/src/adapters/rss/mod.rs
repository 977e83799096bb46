//! RSS adapter
//!
//! Fetches feeds over HTTP and parses them as RSS 2.0.

pub mod client;

pub use client::{parse_feed, RssFeedClient};
