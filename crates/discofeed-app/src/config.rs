//! Configuration constants for discofeed app services

/// Application metadata
pub mod app {
    /// Application name (used for the config directory)
    pub const NAME: &str = "discofeed";
}

/// Feed provider configuration
pub mod providers {
    /// GitHub GraphQL API endpoint
    pub const GITHUB_GRAPHQL_ENDPOINT: &str = "https://api.github.com/graphql";

    /// Default number of discussions fetched per refresh
    pub const DEFAULT_FEED_LIMIT: u32 = 30;

    /// Default seconds between automatic refreshes
    pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 120;
}
