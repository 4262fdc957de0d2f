//! The milestone report consumed by the presentation layer.

use chrono::{DateTime, Utc};
use minestone_types::RateMode;
use serde::Serialize;

/// A complete snapshot of everything the presentation layer renders.
///
/// Fields derived from the estimate are `None` until the first successful
/// poll; once any poll has succeeded they always carry the last-known-good
/// values, even while `feed_error` is set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MilestoneReport {
    /// Latest trusted block height; `None` if no poll has ever succeeded.
    pub height: Option<u64>,
    /// True when the most recent poll cycle failed on both endpoints.
    pub feed_error: bool,
    /// Height at which the milestone threshold is first crossed.
    pub target_height: u64,
    /// The milestone threshold in base units.
    pub threshold: u64,
    /// Blocks still to be mined before the target height is reached.
    pub blocks_remaining: Option<u64>,
    /// Cumulative issuance at the current height, in base units.
    pub issued: Option<u64>,
    /// Base units still to be issued before the threshold is crossed.
    pub issuance_remaining: Option<u64>,
    /// Fraction of the threshold already issued, in `0..=1`.
    pub progress: Option<f64>,
    /// True once the current height has reached the target height.
    pub reached: bool,
    /// Projected instant of crossing; equals the anchor when `reached`.
    pub projected: Option<DateTime<Utc>>,
    /// Active rate in seconds per block.
    pub secs_per_block: Option<f64>,
    /// Which rate strategy is active.
    pub rate_mode: RateMode,
    /// Wall-clock time of the last successful poll.
    pub last_poll: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_to_json() {
        let report = MilestoneReport {
            height: Some(868_423),
            feed_error: false,
            target_height: 939_999,
            threshold: 2_000_000_000_000_000,
            blocks_remaining: Some(71_576),
            issued: Some(1_977_632_812_500_000),
            issuance_remaining: Some(22_367_187_500_000),
            progress: Some(0.988),
            reached: false,
            projected: None,
            secs_per_block: Some(600.0),
            rate_mode: RateMode::Empirical,
            last_poll: None,
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["height"], 868_423);
        assert_eq!(json["rate_mode"], "empirical");
        assert_eq!(json["feed_error"], false);
    }
}
