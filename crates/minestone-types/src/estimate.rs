//! The estimate snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A complete projection estimate.
///
/// An `Estimate` is a strict snapshot: the anchor and the projected instant
/// are always produced together and the whole value is replaced atomically by
/// the coordinator. Consumers never see a half-updated estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// Latest trusted block height.
    pub height: u64,
    /// Active rate in seconds per block.
    pub secs_per_block: f64,
    /// Wall-clock instant associated with `height`, the zero point for
    /// projection.
    pub anchor: DateTime<Utc>,
    /// Projected instant at which the milestone threshold is crossed.
    pub projected: DateTime<Utc>,
}

impl Estimate {
    /// Creates a new estimate snapshot.
    #[must_use]
    pub const fn new(
        height: u64,
        secs_per_block: f64,
        anchor: DateTime<Utc>,
        projected: DateTime<Utc>,
    ) -> Self {
        Self {
            height,
            secs_per_block,
            anchor,
            projected,
        }
    }

    /// Returns true if the given target height has already been reached.
    #[must_use]
    pub const fn reached(&self, target_height: u64) -> bool {
        self.height >= target_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_reached() {
        let anchor = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let estimate = Estimate::new(900_000, 600.0, anchor, anchor);

        assert!(estimate.reached(900_000));
        assert!(estimate.reached(899_999));
        assert!(!estimate.reached(900_001));
    }
}
