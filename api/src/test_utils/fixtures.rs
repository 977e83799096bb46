//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::FeedItem;

/// Create a feed item with both fields present
pub fn test_item(title: &str, description: &str) -> FeedItem {
    FeedItem {
        title: Some(title.to_string()),
        description: Some(description.to_string()),
    }
}

/// A small feed resembling a real top-stories channel
pub fn test_feed() -> Vec<FeedItem> {
    vec![
        test_item(
            "Judge halts <em>travel</em> order",
            "<p>A federal judge granted an emergency stay.</p><img src=\"pixel.gif\"/>",
        ),
        test_item("Storm hits coast", "Thousands without power"),
        FeedItem {
            title: Some("Markets close higher".to_string()),
            description: None,
        },
    ]
}
