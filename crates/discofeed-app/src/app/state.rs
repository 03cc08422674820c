//! Shared feed state
//!
//! `FeedSnapshot` is the state read by whatever surface displays the feed.

use crate::providers::Post;

/// Snapshot of the feed — posts from the last good fetch plus error state
#[derive(Debug, Clone, Default)]
pub struct FeedSnapshot {
    /// Posts from the last successful fetch, newest first
    pub posts: Vec<Post>,
    /// Error text from the last failed fetch (cleared on success)
    ///
    /// Posts from the previous successful fetch stay available next to the
    /// error so the display degrades instead of going blank.
    pub last_error: Option<String>,
    /// True while a fetch is in flight
    pub is_refreshing: bool,
}
