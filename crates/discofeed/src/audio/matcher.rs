//! Audio link matcher
//!
//! Holds the ordered rule table and scans arbitrary text against it. The
//! table is immutable after construction and the matcher keeps no state
//! between calls: scanning the same text twice yields identical results.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::audio::embed;
use crate::audio::platform::Platform;

/// A single detected audio link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioMatch {
    /// Platform whose pattern matched
    pub platform: Platform,
    /// The exact matched substring
    pub url: String,
    /// Byte offset of the match within the scanned text
    ///
    /// `scan` emits matches in platform-table order; a caller that needs
    /// text order can re-sort by this field.
    pub offset: usize,
    /// Rendered embed fragment (may be empty when extraction fails)
    pub embed_markup: String,
}

/// One compiled rule of the platform table
struct PlatformRule {
    platform: Platform,
    pattern: Regex,
}

/// Ordered rule table for recognizing audio links in text
pub struct LinkMatcher {
    rules: Vec<PlatformRule>,
}

static SHARED: Lazy<LinkMatcher> = Lazy::new(LinkMatcher::new);

impl LinkMatcher {
    /// Build the full rule table, one rule per platform, in table order
    pub fn new() -> Self {
        Self::with_platforms(&Platform::ALL)
    }

    /// Build a table restricted to the given platforms
    ///
    /// Evaluation order is always the declaration order of [`Platform`],
    /// regardless of the order of `platforms`.
    pub fn with_platforms(platforms: &[Platform]) -> Self {
        let rules = Platform::ALL
            .iter()
            .copied()
            .filter(|p| platforms.contains(p))
            .map(|platform| PlatformRule {
                platform,
                // Pattern sources are fixed literals; compilation cannot fail.
                pattern: Regex::new(platform.pattern()).expect("platform pattern"),
            })
            .collect();
        Self { rules }
    }

    /// Process-wide matcher with the full rule table
    pub fn shared() -> &'static LinkMatcher {
        &SHARED
    }

    /// Platforms in this matcher's table, in evaluation order
    pub fn platforms(&self) -> Vec<Platform> {
        self.rules.iter().map(|r| r.platform).collect()
    }

    /// Scan text and collect every audio link across all platforms
    ///
    /// For each platform in table order, every non-overlapping match of its
    /// pattern is reported with the embed fragment already rendered. Matches
    /// from different platforms are not deduplicated: a URL matched by two
    /// patterns is reported twice.
    pub fn scan(&self, text: &str) -> Vec<AudioMatch> {
        let mut matches = Vec::new();
        for rule in &self.rules {
            for m in rule.pattern.find_iter(text) {
                matches.push(AudioMatch {
                    platform: rule.platform,
                    url: m.as_str().to_string(),
                    offset: m.start(),
                    embed_markup: embed::build(rule.platform, m.as_str()),
                });
            }
        }
        matches
    }

    /// Whether any platform pattern matches anywhere in the text
    ///
    /// Short-circuits on the first positive platform.
    pub fn contains_any(&self, text: &str) -> bool {
        self.rules.iter().any(|r| r.pattern.is_match(text))
    }

    /// First match in platform-table order, if any
    ///
    /// Equivalent to the first element of [`scan`](Self::scan): the earliest
    /// platform in the table with a hit wins, not the earliest text position.
    pub fn first_match(&self, text: &str) -> Option<AudioMatch> {
        for rule in &self.rules {
            if let Some(m) = rule.pattern.find(text) {
                return Some(AudioMatch {
                    platform: rule.platform,
                    url: m.as_str().to_string(),
                    offset: m.start(),
                    embed_markup: embed::build(rule.platform, m.as_str()),
                });
            }
        }
        None
    }
}

impl Default for LinkMatcher {
    fn default() -> Self {
        Self::new()
    }
}
