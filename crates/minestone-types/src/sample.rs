//! Feed sample representation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single observation from the feed: a block height and the timestamp the
/// feed reported for it.
///
/// Heights are monotonically non-decreasing across the chain, but a batch of
/// samples from the feed may arrive unordered, and timestamps may be
/// duplicated or out of order due to feed artifacts. Consumers sort and
/// filter; a sample itself is immutable once observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSample {
    /// Block height reported by the feed.
    pub height: u64,
    /// Timestamp associated with the height (UTC).
    pub timestamp: DateTime<Utc>,
}

impl FeedSample {
    /// Creates a new feed sample.
    #[must_use]
    pub const fn new(height: u64, timestamp: DateTime<Utc>) -> Self {
        Self { height, timestamp }
    }
}

/// Sorts samples in place so the most recent (highest height) comes first.
pub fn sort_most_recent_first(samples: &mut [FeedSample]) {
    samples.sort_by(|a, b| b.height.cmp(&a.height));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample(height: u64, secs: i64) -> FeedSample {
        FeedSample::new(height, Utc.timestamp_opt(secs, 0).unwrap())
    }

    #[test]
    fn test_sort_most_recent_first() {
        let mut samples = vec![sample(100, 1000), sample(102, 2200), sample(101, 1600)];
        sort_most_recent_first(&mut samples);

        let heights: Vec<u64> = samples.iter().map(|s| s.height).collect();
        assert_eq!(heights, vec![102, 101, 100]);
    }

    #[test]
    fn test_sort_empty() {
        let mut samples: Vec<FeedSample> = Vec::new();
        sort_most_recent_first(&mut samples);
        assert!(samples.is_empty());
    }
}
