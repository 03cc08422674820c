//! Post body formatting
//!
//! Prepares a post body for display next to its embed: every matched raw URL
//! is removed from the text (exact substring removal, not pattern-based),
//! then the remainder is truncated, escaped, and newline-converted.

use crate::audio::matcher::AudioMatch;
use crate::config::feed::{ELLIPSIS, MAX_DISPLAY_CHARS};

/// Remove every matched raw URL from the text
///
/// Exact string removal: each match's `url` substring is deleted wherever it
/// occurs, matching the source behavior of stripping links that are shown as
/// players instead.
pub fn strip_urls(text: &str, matches: &[AudioMatch]) -> String {
    let mut out = text.to_string();
    for m in matches {
        out = out.replace(&m.url, "");
    }
    out
}

/// Truncate to at most `max` characters, char-boundary safe
///
/// Appends an ellipsis when anything was cut.
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}{}", cut.trim_end(), ELLIPSIS)
    }
}

/// Escape text for insertion into HTML
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Convert newlines to `<br>` tags (CR characters are dropped)
pub fn newlines_to_breaks(text: &str) -> String {
    text.replace('\r', "").replace('\n', "<br>")
}

/// Full display pipeline for a post body
///
/// Order matters: URLs are stripped from the raw text first, the remainder is
/// trimmed and truncated, and only then escaped and newline-converted so the
/// inserted `<br>` tags survive escaping.
pub fn format_body(body: &str, matches: &[AudioMatch]) -> String {
    let stripped = strip_urls(body, matches);
    let truncated = truncate_chars(stripped.trim(), MAX_DISPLAY_CHARS);
    newlines_to_breaks(&escape_html(&truncated))
}
