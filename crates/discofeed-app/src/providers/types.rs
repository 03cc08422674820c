//! Shared feed provider types

use chrono::{DateTime, Utc};

/// A single feed post (one discussion thread used as a social post)
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    /// Author login
    pub author: String,
    /// Author avatar image URL, if any
    pub avatar_url: Option<String>,
    /// Discussion title
    pub title: String,
    /// Raw post body as written
    pub body: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Canonical URL of the discussion
    pub url: String,
    /// Number of comments on the discussion
    pub comment_count: u32,
    /// Number of reactions on the discussion
    pub reaction_count: u32,
}
