//! Audio link recognition and embed generation
//!
//! A fixed, ordered table of platform rules: each platform carries a
//! detection pattern and an embed builder. `LinkMatcher` scans text against
//! the table; `embed` turns matched URLs into markup fragments.

pub mod embed;
pub mod matcher;
pub mod platform;

pub use matcher::{AudioMatch, LinkMatcher};
pub use platform::Platform;
