//! Discofeed — Audio Link Engine
//!
//! Recognizes embeddable audio links (SoundCloud, YouTube, Spotify, Bandcamp,
//! direct audio files) in arbitrary text and renders a per-platform embed
//! fragment for each one. Entirely synchronous and stateless between calls.
//!
//! ## Quick start
//!
//! ```
//! use discofeed::audio::LinkMatcher;
//!
//! let matcher = LinkMatcher::new();
//! let matches = matcher.scan("check this https://youtu.be/dQw4w9WgXcQ out");
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].url, "https://youtu.be/dQw4w9WgXcQ");
//! ```

pub mod audio;
pub mod config;
pub mod feed;
