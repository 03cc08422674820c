//! Shared HTTP client wrapper
//!
//! Thin wrapper around `reqwest::blocking::Client` that centralizes
//! USER_AGENT and timeout configuration. No retries, no cancellation: a
//! failed request surfaces once and an in-flight request runs to completion.

use crate::error::Result;
use discofeed::config::network::{CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS, USER_AGENT};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Shared HTTP client with standard configuration
pub struct HttpClient {
    inner: reqwest::blocking::Client,
}

impl HttpClient {
    /// Create a new client with default discofeed settings
    pub fn new() -> Result<Self> {
        let inner = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(READ_TIMEOUT_SECS))
            .build()?;
        Ok(Self { inner })
    }

    /// POST a JSON body and deserialize the JSON response
    ///
    /// `token`, when present, is sent as a bearer Authorization header.
    /// Non-success statuses are reported as errors, not parsed.
    pub fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<T> {
        let mut req = self.inner.post(url).json(body);
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        let resp = req.send()?.error_for_status()?;
        let data = resp.json::<T>()?;
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HttpClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_post_json_invalid_url() {
        let client = HttpClient::new().unwrap();
        let result: Result<serde_json::Value> = client.post_json(
            "http://invalid.invalid.invalid",
            None,
            &serde_json::json!({}),
        );
        assert!(result.is_err());
    }
}
