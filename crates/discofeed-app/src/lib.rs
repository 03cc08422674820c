//! Discofeed App Services
//!
//! Feed providers, settings persistence, networking, and post rendering.
//! Depends on the `discofeed` engine crate.

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod feed;
pub mod network;
pub mod providers;
