//! Embed markup builders
//!
//! One builder per platform, mapping a matched URL to a self-contained HTML
//! fragment. Builders are pure and never fail: when a required piece cannot
//! be extracted the result is an empty string and the caller renders nothing.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::audio::platform::Platform;
use crate::config::embed::{
    SOUNDCLOUD_COLOR, SOUNDCLOUD_HEIGHT, SPOTIFY_COLLECTION_HEIGHT, SPOTIFY_TRACK_HEIGHT,
    YOUTUBE_HEIGHT,
};

/// Build the embed fragment for a URL matched by the given platform's rule
pub fn build(platform: Platform, url: &str) -> String {
    match platform {
        Platform::SoundCloud => soundcloud(url),
        Platform::YouTube => youtube(url),
        Platform::Spotify => spotify(url),
        Platform::Bandcamp => bandcamp(url),
        Platform::AudioFile => audio_file(url),
    }
}

/// SoundCloud hosted player; the whole track URL rides in the query string
fn soundcloud(url: &str) -> String {
    let encoded = urlencoding::encode(url);
    format!(
        "<iframe width=\"100%\" height=\"{SOUNDCLOUD_HEIGHT}\" scrolling=\"no\" \
         frameborder=\"no\" allow=\"autoplay\" \
         src=\"https://w.soundcloud.com/player/?url={encoded}&color={SOUNDCLOUD_COLOR}&auto_play=false\">\
         </iframe>"
    )
}

/// YouTube video ID shapes, tried in order; the first hit wins
static YOUTUBE_ID_PATTERNS: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        Regex::new(r"watch\?v=([A-Za-z0-9_-]{11})").expect("watch pattern"),
        Regex::new(r"youtu\.be/([A-Za-z0-9_-]{11})").expect("short-link pattern"),
        Regex::new(r"embed/([A-Za-z0-9_-]{11})").expect("embed pattern"),
    ]
});

fn youtube(url: &str) -> String {
    let id = YOUTUBE_ID_PATTERNS
        .iter()
        .find_map(|p| p.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str());
    match id {
        Some(id) => format!(
            "<iframe width=\"100%\" height=\"{YOUTUBE_HEIGHT}\" \
             src=\"https://www.youtube.com/embed/{id}\" frameborder=\"0\" \
             allow=\"encrypted-media\" allowfullscreen></iframe>"
        ),
        // No recognizable video ID: degrade silently
        None => String::new(),
    }
}

/// Spotify item type and ID in one pattern, two capture groups
static SPOTIFY_ITEM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"open\.spotify\.com/(track|album|playlist)/([A-Za-z0-9]+)")
        .expect("spotify pattern")
});

fn spotify(url: &str) -> String {
    let caps = match SPOTIFY_ITEM.captures(url) {
        Some(caps) => caps,
        None => return String::new(),
    };
    let kind = &caps[1];
    let id = &caps[2];
    // Tracks get the compact player; albums and playlists the tall one
    let height = if kind == "track" {
        SPOTIFY_TRACK_HEIGHT
    } else {
        SPOTIFY_COLLECTION_HEIGHT
    };
    format!(
        "<iframe src=\"https://open.spotify.com/embed/{kind}/{id}\" width=\"100%\" \
         height=\"{height}\" frameborder=\"0\" allowtransparency=\"true\" \
         allow=\"encrypted-media\"></iframe>"
    )
}

/// Bandcamp's player needs an item ID only their API can supply, so the
/// fragment is a plain external link instead of an embedded player.
fn bandcamp(url: &str) -> String {
    format!("<a href=\"{url}\" target=\"_blank\" rel=\"noopener\">{url}</a>")
}

/// Direct audio file: the raw URL goes verbatim into the source attribute.
/// The declared MIME type is always audio/mpeg, whatever the extension.
fn audio_file(url: &str) -> String {
    format!("<audio controls><source src=\"{url}\" type=\"audio/mpeg\"></audio>")
}
