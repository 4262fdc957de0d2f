//! The feed source seam.

use minestone_feed::{FeedClient, FeedError};
use minestone_types::FeedSample;

/// Abstraction over the two feed endpoints, so the coordinator can be
/// driven by the HTTP client in production and by a scripted source in
/// tests.
#[allow(async_fn_in_trait)]
pub trait FeedSource {
    /// Fetches a batch of recent block samples (the primary endpoint).
    async fn recent_blocks(&self) -> Result<Vec<FeedSample>, FeedError>;

    /// Fetches the current height alone (the fallback endpoint).
    async fn current_height(&self) -> Result<u64, FeedError>;
}

impl FeedSource for FeedClient {
    async fn recent_blocks(&self) -> Result<Vec<FeedSample>, FeedError> {
        Self::recent_blocks(self).await
    }

    async fn current_height(&self) -> Result<u64, FeedError> {
        Self::current_height(self).await
    }
}
