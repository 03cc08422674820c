//! Error types for discofeed app services
//!
//! Centralized error handling using thiserror. Nothing here is fatal: every
//! failure is a value the caller turns into visible feed state.

use thiserror::Error;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{}", friendly_network_error(.0))]
    Network(#[from] reqwest::Error),

    /// Application-level error reported by the GraphQL service
    #[error("GitHub API error: {0}")]
    Api(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for discofeed app services
pub type Result<T> = std::result::Result<T, AppError>;

fn friendly_network_error(e: &reqwest::Error) -> String {
    if e.is_builder() {
        if let Some(url) = e.url() {
            return format!("Invalid URL: {url}");
        }
        return "Invalid URL".to_string();
    }
    if e.is_connect() {
        if let Some(url) = e.url() {
            return format!("Could not connect to {}", url.host_str().unwrap_or("server"));
        }
        return "Could not connect to server".to_string();
    }
    if e.is_timeout() {
        return "Connection timed out".to_string();
    }
    if e.is_status() {
        if let Some(status) = e.status() {
            return format!("Server returned {status}");
        }
    }
    if e.is_decode() {
        return "Invalid response from server".to_string();
    }
    format!("Network error: {e}")
}
