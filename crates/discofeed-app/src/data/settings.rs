//! Application settings management
//!
//! The explicit configuration value handed to each component's constructor:
//! feed source coordinates, refresh behavior, enabled platforms, and display
//! toggles. Persisted as JSON through the storage layer.

use crate::config::providers::{DEFAULT_FEED_LIMIT, DEFAULT_REFRESH_INTERVAL_SECS};
use crate::data::storage;
use crate::error::Result;
use discofeed::audio::Platform;
use serde::{Deserialize, Serialize};

/// Settings data file name
const SETTINGS_FILE: &str = "settings.json";

/// Settings file format version for migrations
const SETTINGS_VERSION: u32 = 1;

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// File format version
    #[serde(default = "default_version")]
    pub version: u32,

    // === Feed source ===
    /// Repository owner (user or organization)
    #[serde(default)]
    pub owner: String,

    /// Repository name
    #[serde(default)]
    pub repo: String,

    /// Discussion category scoping the feed (all categories when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,

    /// Bearer token for the GraphQL API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Forwarding prefix prepended to the GraphQL endpoint URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_prefix: Option<String>,

    /// Number of posts fetched per refresh
    #[serde(default = "default_feed_limit")]
    pub feed_limit: u32,

    // === Refresh ===
    /// Emit a meta refresh tag on rendered pages so the browser re-fetches
    #[serde(default = "default_true")]
    pub auto_refresh: bool,

    /// Seconds between automatic refreshes
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,

    // === Platforms ===
    /// Platform IDs whose links are detected and embedded
    #[serde(default = "default_platforms")]
    pub enabled_platforms: Vec<String>,

    // === Display ===
    /// Show comment counts in post footers
    #[serde(default = "default_true")]
    pub show_comment_counts: bool,

    /// Show reaction counts in post footers
    #[serde(default = "default_true")]
    pub show_reaction_counts: bool,
}

fn default_version() -> u32 {
    SETTINGS_VERSION
}

fn default_feed_limit() -> u32 {
    DEFAULT_FEED_LIMIT
}

fn default_refresh_interval() -> u64 {
    DEFAULT_REFRESH_INTERVAL_SECS
}

fn default_true() -> bool {
    true
}

fn default_platforms() -> Vec<String> {
    Platform::ALL.iter().map(|p| p.id().to_string()).collect()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            owner: String::new(),
            repo: String::new(),
            category_id: None,
            token: None,
            endpoint_prefix: None,
            feed_limit: default_feed_limit(),
            auto_refresh: true,
            refresh_interval_secs: default_refresh_interval(),
            enabled_platforms: default_platforms(),
            show_comment_counts: true,
            show_reaction_counts: true,
        }
    }
}

impl Settings {
    /// Load settings from the default storage location
    ///
    /// Missing file yields defaults; a corrupt file is an error so the user's
    /// configuration is not silently overwritten.
    pub fn load() -> Result<Self> {
        match storage::load::<Settings>(SETTINGS_FILE)? {
            Some(settings) => Ok(settings),
            None => Ok(Self::default()),
        }
    }

    /// Load settings from a specific path
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        match storage::load_from::<Settings>(path)? {
            Some(settings) => Ok(settings),
            None => Ok(Self::default()),
        }
    }

    /// Save settings to the default storage location
    pub fn save(&self) -> Result<()> {
        storage::save(SETTINGS_FILE, self)
    }

    /// Save settings to a specific path
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        storage::save_to(path, self)
    }

    /// Enabled platforms parsed into engine values
    ///
    /// Unknown IDs are skipped; table order is restored by the matcher.
    pub fn platforms(&self) -> Vec<Platform> {
        self.enabled_platforms
            .iter()
            .filter_map(|id| Platform::from_id(id))
            .collect()
    }

    /// Whether the feed source is configured at all
    pub fn has_repository(&self) -> bool {
        !self.owner.is_empty() && !self.repo.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.version, SETTINGS_VERSION);
        assert!(settings.owner.is_empty());
        assert_eq!(settings.feed_limit, DEFAULT_FEED_LIMIT);
        assert!(settings.auto_refresh);
        assert!(settings.show_comment_counts);
        assert!(settings.show_reaction_counts);
        assert_eq!(settings.enabled_platforms.len(), Platform::ALL.len());
        assert!(!settings.has_repository());
    }

    #[test]
    fn test_platforms_parses_all_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.platforms(), Platform::ALL.to_vec());
    }

    #[test]
    fn test_platforms_skips_unknown_ids() {
        let settings = Settings {
            enabled_platforms: vec![
                "spotify".to_string(),
                "myspace".to_string(),
                "youtube".to_string(),
            ],
            ..Settings::default()
        };
        assert_eq!(
            settings.platforms(),
            vec![Platform::YouTube, Platform::Spotify]
        );
    }

    #[test]
    fn test_has_repository() {
        let mut settings = Settings::default();
        settings.owner = "octocat".to_string();
        assert!(!settings.has_repository());
        settings.repo = "hello-world".to_string();
        assert!(settings.has_repository());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = Settings::default();
        settings.owner = "octocat".to_string();
        settings.repo = "music".to_string();
        settings.category_id = Some("DIC_abc123".to_string());
        settings.feed_limit = 10;
        settings.show_reaction_counts = false;

        settings.save_to(&path).unwrap();
        let loaded = Settings::load_from(&path).unwrap();

        assert_eq!(loaded.owner, "octocat");
        assert_eq!(loaded.repo, "music");
        assert_eq!(loaded.category_id.as_deref(), Some("DIC_abc123"));
        assert_eq!(loaded.feed_limit, 10);
        assert!(!loaded.show_reaction_counts);
    }

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Settings::load_from(&dir.path().join("missing.json")).unwrap();
        assert_eq!(loaded.feed_limit, DEFAULT_FEED_LIMIT);
    }

    #[test]
    fn test_partial_file_gets_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.json");
        std::fs::write(&path, r#"{"owner": "octocat", "repo": "music"}"#).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.owner, "octocat");
        assert_eq!(loaded.feed_limit, DEFAULT_FEED_LIMIT);
        assert!(loaded.auto_refresh);
        assert_eq!(loaded.platforms(), Platform::ALL.to_vec());
    }

    #[test]
    fn test_optional_fields_not_serialized_when_unset() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        assert!(!json.contains("category_id"));
        assert!(!json.contains("token"));
        assert!(!json.contains("endpoint_prefix"));
    }
}
