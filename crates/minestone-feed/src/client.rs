//! HTTP client for the primary and fallback feed endpoints.

use std::time::Duration;

use minestone_types::FeedSample;
use reqwest::Client;
use thiserror::Error;

use crate::wire::{ParseError, parse_block_batch, parse_height};

/// Configuration for the feed client.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Primary endpoint returning a JSON batch of recent block records.
    pub primary_url: String,
    /// Fallback endpoint returning a single plain-text height.
    pub fallback_url: String,
    /// Request timeout, bounding worst-case staleness of a poll cycle.
    pub timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            primary_url: "https://blockchain.info/blocks/?format=json".to_string(),
            fallback_url: "https://blockchain.info/q/getblockcount".to_string(),
            timeout: Duration::from_secs(10),
            user_agent: format!("minestone/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors that can occur during a feed request.
///
/// All of these are transient from the tracker's point of view: the poll
/// cycle converts them into a fallback attempt or a stale-state report.
#[derive(Error, Debug)]
pub enum FeedError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned a non-success status.
    #[error("Server error: {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// Payload could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl From<FeedError> for minestone_types::MinestoneError {
    fn from(error: FeedError) -> Self {
        match error {
            FeedError::Http(e) => Self::Http(e.to_string()),
            FeedError::Status { status } => Self::Http(format!("status {status}")),
            FeedError::Parse(e) => Self::Parse(e.to_string()),
        }
    }
}

/// HTTP client with connection pooling for both feed endpoints.
#[derive(Debug, Clone)]
pub struct FeedClient {
    client: Client,
    config: FeedConfig,
}

impl FeedClient {
    /// Creates a new feed client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: FeedConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            // Both endpoints sit on the same host; keep a couple of warm
            // connections between polls.
            .pool_max_idle_per_host(2)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_nodelay(true)
            .tcp_keepalive(Duration::from_secs(60))
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(FeedConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Fetches a batch of recent block samples from the primary endpoint.
    ///
    /// The batch is returned in payload order and always non-empty.
    ///
    /// # Errors
    ///
    /// Returns an error on any request, status, or payload failure. There is
    /// no retry here; the caller's next poll cycle is the retry.
    pub async fn recent_blocks(&self) -> Result<Vec<FeedSample>, FeedError> {
        let response = self.client.get(&self.config.primary_url).send().await?;
        if !response.status().is_success() {
            return Err(FeedError::Status {
                status: response.status().as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(parse_block_batch(&body)?)
    }

    /// Fetches the current height from the fallback endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error on any request, status, or payload failure.
    pub async fn current_height(&self) -> Result<u64, FeedError> {
        let response = self.client.get(&self.config.fallback_url).send().await?;
        if !response.status().is_success() {
            return Err(FeedError::Status {
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(parse_height(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_config_default() {
        let config = FeedConfig::default();
        assert!(config.primary_url.contains("format=json"));
        assert!(config.fallback_url.contains("getblockcount"));
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("minestone/"));
    }

    #[tokio::test]
    async fn test_client_creation() {
        let client = FeedClient::with_defaults();
        assert!(client.is_ok());
    }
}
