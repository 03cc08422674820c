//! Feed provider trait
//!
//! Defines the interface that all feed sources must implement.

use crate::error::Result;

use super::types::Post;

/// A source of feed posts
pub trait FeedProvider: Send + Sync {
    /// Display name for the provider (e.g., "GitHub Discussions")
    fn name(&self) -> &'static str;

    /// Machine-readable identifier (e.g., "github-discussions")
    fn id(&self) -> &'static str;

    /// Fetch up to `limit` posts, newest first
    fn fetch(&self, limit: u32) -> Result<Vec<Post>>;
}
