//! Feed rendering

pub mod render;

pub use render::{render_feed, render_page, render_post};
