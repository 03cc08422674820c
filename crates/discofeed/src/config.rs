//! Configuration constants for the discofeed engine

/// Embed sizing and template parameters
pub mod embed {
    /// SoundCloud hosted player height (px)
    pub const SOUNDCLOUD_HEIGHT: u32 = 166;

    /// YouTube player height (px)
    pub const YOUTUBE_HEIGHT: u32 = 200;

    /// Spotify player height for single tracks (px)
    pub const SPOTIFY_TRACK_HEIGHT: u32 = 80;

    /// Spotify player height for albums and playlists (px)
    pub const SPOTIFY_COLLECTION_HEIGHT: u32 = 380;

    /// SoundCloud player accent color, percent-encoded ("#ff5500")
    pub const SOUNDCLOUD_COLOR: &str = "%23ff5500";
}

/// Feed display configuration
pub mod feed {
    /// Maximum number of characters of body text shown per post
    pub const MAX_DISPLAY_CHARS: usize = 300;

    /// Appended when body text is truncated
    pub const ELLIPSIS: &str = "…";
}

/// Network-related configuration (read by the app crate's HTTP client)
pub mod network {
    /// User agent for HTTP requests
    pub const USER_AGENT: &str = concat!("Discofeed/", env!("CARGO_PKG_VERSION"));

    /// Connection timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Read timeout in seconds
    pub const READ_TIMEOUT_SECS: u64 = 30;
}
