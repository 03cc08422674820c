//! Feed text formatting
//!
//! Display-side glue for matcher output: URL stripping, truncation, and
//! HTML-safe text conversion.

pub mod formatter;

pub use formatter::{escape_html, format_body, newlines_to_breaks, strip_urls, truncate_chars};
