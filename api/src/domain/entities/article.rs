//! Article entity
//!
//! The unit served by `/api/news`: a title and description with markup removed.

use serde::{Deserialize, Serialize};

/// A raw entry as read from an upstream feed. Fields may contain HTML.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedItem {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// A news article as returned to clients.
///
/// Absent fields serialize as `null` so the payload shape is stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: Option<String>,
    pub description: Option<String>,
}
