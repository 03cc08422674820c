//! Supported audio platforms
//!
//! The fixed set of services whose links the matcher recognizes. Declaration
//! order is the evaluation order of the rule table: callers asking for the
//! "first" match get the first platform in this order whose pattern occurs
//! anywhere in the text, not the first occurrence by text position.

/// A recognized audio hosting service, or a direct audio file reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    SoundCloud,
    YouTube,
    Spotify,
    Bandcamp,
    /// Direct link to an audio file (.mp3, .wav, .ogg, .m4a, .flac)
    AudioFile,
}

impl Platform {
    /// All platforms, in rule-table order
    pub const ALL: [Platform; 5] = [
        Platform::SoundCloud,
        Platform::YouTube,
        Platform::Spotify,
        Platform::Bandcamp,
        Platform::AudioFile,
    ];

    /// Machine-readable identifier (stable, used in settings files)
    pub fn id(&self) -> &'static str {
        match self {
            Platform::SoundCloud => "soundcloud",
            Platform::YouTube => "youtube",
            Platform::Spotify => "spotify",
            Platform::Bandcamp => "bandcamp",
            Platform::AudioFile => "audio-file",
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Platform::SoundCloud => "SoundCloud",
            Platform::YouTube => "YouTube",
            Platform::Spotify => "Spotify",
            Platform::Bandcamp => "Bandcamp",
            Platform::AudioFile => "Audio file",
        }
    }

    /// Look up a platform by its identifier
    pub fn from_id(id: &str) -> Option<Platform> {
        Platform::ALL.iter().copied().find(|p| p.id() == id)
    }

    /// Detection pattern source for this platform (global-match semantics)
    ///
    /// Patterns stop at whitespace and common markup delimiters so a link
    /// pasted into prose matches exactly the URL substring.
    pub(crate) fn pattern(&self) -> &'static str {
        match self {
            Platform::SoundCloud => r#"https?://(?:www\.)?soundcloud\.com/[^\s<>"']+"#,
            Platform::YouTube => {
                r#"https?://(?:www\.|m\.)?(?:youtube\.com|youtu\.be)/[^\s<>"']+"#
            }
            Platform::Spotify => {
                r#"https?://open\.spotify\.com/(?:track|album|playlist)/[^\s<>"']+"#
            }
            Platform::Bandcamp => r#"https?://[A-Za-z0-9-]+\.bandcamp\.com/[^\s<>"']+"#,
            Platform::AudioFile => {
                r#"https?://[^\s<>"']+\.(?:mp3|wav|ogg|m4a|flac)(?:\?[^\s<>"']*)?"#
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order() {
        assert_eq!(
            Platform::ALL,
            [
                Platform::SoundCloud,
                Platform::YouTube,
                Platform::Spotify,
                Platform::Bandcamp,
                Platform::AudioFile,
            ]
        );
    }

    #[test]
    fn test_ids_are_unique() {
        for (i, a) in Platform::ALL.iter().enumerate() {
            for b in &Platform::ALL[i + 1..] {
                assert_ne!(a.id(), b.id());
            }
        }
    }

    #[test]
    fn test_from_id_round_trip() {
        for p in Platform::ALL {
            assert_eq!(Platform::from_id(p.id()), Some(p));
        }
    }

    #[test]
    fn test_from_id_unknown() {
        assert_eq!(Platform::from_id("myspace"), None);
        assert_eq!(Platform::from_id(""), None);
    }

    #[test]
    fn test_patterns_compile() {
        for p in Platform::ALL {
            assert!(regex::Regex::new(p.pattern()).is_ok(), "{}", p.id());
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Platform::SoundCloud.name(), "SoundCloud");
        assert_eq!(Platform::AudioFile.name(), "Audio file");
    }
}
