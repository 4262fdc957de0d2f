//! The issuance schedule and its closed-form operations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use minestone_types::COIN;

use crate::era::EraIter;

/// Errors produced by schedule construction and the threshold solver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Schedule parameters must both be positive.
    #[error("Invalid schedule: initial subsidy {initial_subsidy}, era length {era_length}")]
    InvalidSchedule {
        /// The initial per-block subsidy that was supplied.
        initial_subsidy: u64,
        /// The era length that was supplied.
        era_length: u64,
    },

    /// The threshold exceeds the schedule's finite total issuance.
    ///
    /// Both the schedule and the threshold are startup constants, so this is
    /// a fatal configuration error, never a runtime condition.
    #[error("Threshold {threshold} exceeds total issuance {total}")]
    ThresholdUnreachable {
        /// The requested threshold in base units.
        threshold: u64,
        /// The schedule's total issuance in base units.
        total: u64,
    },
}

impl From<ScheduleError> for minestone_types::MinestoneError {
    fn from(error: ScheduleError) -> Self {
        Self::Config(error.to_string())
    }
}

/// A halving reward schedule.
///
/// Block `h` issues `initial_subsidy >> (h / era_length)` base units upon its
/// completion. Integer halving floors the subsidy, so it eventually reaches
/// zero and total issuance is finite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuanceSchedule {
    initial_subsidy: u64,
    era_length: u64,
}

impl IssuanceSchedule {
    /// The historical Bitcoin schedule: 50 coins per block, halved every
    /// 210 000 blocks.
    pub const BITCOIN: Self = Self {
        initial_subsidy: 50 * COIN,
        era_length: 210_000,
    };

    /// Creates a schedule, validating that both parameters are positive.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidSchedule`] if either parameter is zero.
    pub const fn new(initial_subsidy: u64, era_length: u64) -> Result<Self, ScheduleError> {
        if initial_subsidy == 0 || era_length == 0 {
            return Err(ScheduleError::InvalidSchedule {
                initial_subsidy,
                era_length,
            });
        }
        Ok(Self {
            initial_subsidy,
            era_length,
        })
    }

    /// Returns the per-block subsidy of the first era.
    #[must_use]
    pub const fn initial_subsidy(&self) -> u64 {
        self.initial_subsidy
    }

    /// Returns the number of blocks per era.
    #[must_use]
    pub const fn era_length(&self) -> u64 {
        self.era_length
    }

    /// Returns the per-block subsidy for the given era index.
    ///
    /// Halving floors toward zero; from some era on the subsidy is zero.
    #[must_use]
    pub const fn subsidy_for_era(&self, era: u32) -> u64 {
        if era >= u64::BITS {
            0
        } else {
            self.initial_subsidy >> era
        }
    }

    /// Returns the per-block subsidy at the given height.
    #[must_use]
    pub const fn subsidy_at(&self, height: u64) -> u64 {
        let era = height / self.era_length;
        if era >= u64::BITS as u64 {
            0
        } else {
            self.subsidy_for_era(era as u32)
        }
    }

    /// Returns the number of eras with a nonzero subsidy.
    #[must_use]
    pub const fn era_count(&self) -> u32 {
        u64::BITS - self.initial_subsidy.leading_zeros()
    }

    /// Returns an iterator over the nonzero-subsidy eras.
    #[must_use]
    pub const fn eras(&self) -> EraIter {
        EraIter::new(*self)
    }

    /// Returns the total issuance over all eras, in base units.
    ///
    /// Finite because integer halving floors the subsidy to zero.
    #[must_use]
    pub fn total_issuance(&self) -> u64 {
        self.eras().fold(0u64, |total, era| {
            total.saturating_add(self.era_length.saturating_mul(era.subsidy))
        })
    }

    /// Returns the cumulative issuance through (and including) `height`.
    ///
    /// Issuance is credited upon a block's completion, so `height` covers
    /// `height + 1` increments. Monotonically non-decreasing in `height` and
    /// bounded by [`total_issuance`](Self::total_issuance).
    #[must_use]
    pub fn cumulative_at(&self, height: u64) -> u64 {
        let mut remaining = height.saturating_add(1);
        let mut total = 0u64;

        for era in self.eras() {
            if remaining == 0 {
                break;
            }
            let take = remaining.min(self.era_length);
            total = total.saturating_add(take.saturating_mul(era.subsidy));
            remaining -= take;
        }

        total
    }

    /// Returns the fraction of total issuance reached at `height`, in `0..=1`.
    #[must_use]
    pub fn fraction_issued(&self, height: u64) -> f64 {
        self.cumulative_at(height) as f64 / self.total_issuance() as f64
    }

    /// Finds the smallest height whose cumulative issuance reaches
    /// `threshold` base units.
    ///
    /// Walks the eras, consuming each era's full issuance while the remaining
    /// threshold exceeds it; within the crossing era the offset is the
    /// ceiling division of the remainder by the era subsidy. The final `- 1`
    /// converts an increment count back to a 0-indexed height, since
    /// issuance for a block is credited at that block's completion.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::ThresholdUnreachable`] if the threshold
    /// exceeds the schedule's total issuance.
    pub fn height_for_threshold(&self, threshold: u64) -> Result<u64, ScheduleError> {
        if threshold == 0 {
            // Already satisfied by the first block; heights are 0-indexed.
            return Ok(0);
        }

        let mut remaining = threshold;
        let mut consumed = 0u64;

        for era in self.eras() {
            let era_issuance = self.era_length.saturating_mul(era.subsidy);
            if remaining > era_issuance {
                remaining -= era_issuance;
                consumed += self.era_length;
            } else {
                let offset = remaining.div_ceil(era.subsidy);
                return Ok(consumed + offset - 1);
            }
        }

        Err(ScheduleError::ThresholdUnreachable {
            threshold,
            total: self.total_issuance(),
        })
    }
}

impl Default for IssuanceSchedule {
    fn default() -> Self {
        Self::BITCOIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Total issuance of the Bitcoin schedule in base units.
    const BITCOIN_TOTAL: u64 = 2_099_999_997_690_000;

    #[test]
    fn test_new_rejects_zero_parameters() {
        assert!(IssuanceSchedule::new(0, 210_000).is_err());
        assert!(IssuanceSchedule::new(50 * COIN, 0).is_err());
        assert!(IssuanceSchedule::new(50 * COIN, 210_000).is_ok());
    }

    #[test]
    fn test_subsidy_halves_per_era() {
        let schedule = IssuanceSchedule::BITCOIN;

        assert_eq!(schedule.subsidy_for_era(0), 50 * COIN);
        assert_eq!(schedule.subsidy_for_era(1), 25 * COIN);
        assert_eq!(schedule.subsidy_for_era(2), 1_250_000_000);
        // Integer halving floors all the way down to a single base unit...
        assert_eq!(schedule.subsidy_for_era(32), 1);
        // ...and then to zero.
        assert_eq!(schedule.subsidy_for_era(33), 0);
        assert_eq!(schedule.subsidy_for_era(200), 0);
    }

    #[test]
    fn test_subsidy_at_era_boundaries() {
        let schedule = IssuanceSchedule::BITCOIN;

        assert_eq!(schedule.subsidy_at(0), 50 * COIN);
        assert_eq!(schedule.subsidy_at(209_999), 50 * COIN);
        assert_eq!(schedule.subsidy_at(210_000), 25 * COIN);
        assert_eq!(schedule.subsidy_at(6_929_999), 1);
        assert_eq!(schedule.subsidy_at(6_930_000), 0);
    }

    #[test]
    fn test_era_count() {
        assert_eq!(IssuanceSchedule::BITCOIN.era_count(), 33);
        assert_eq!(IssuanceSchedule::new(1, 100).unwrap().era_count(), 1);
        assert_eq!(IssuanceSchedule::new(4, 100).unwrap().era_count(), 3);
    }

    #[test]
    fn test_total_issuance() {
        assert_eq!(IssuanceSchedule::BITCOIN.total_issuance(), BITCOIN_TOTAL);

        // 100 blocks at 4, 100 at 2, 100 at 1.
        let small = IssuanceSchedule::new(4, 100).unwrap();
        assert_eq!(small.total_issuance(), 700);
    }

    #[test]
    fn test_cumulative_at_closed_form() {
        let schedule = IssuanceSchedule::BITCOIN;

        // Height h covers h + 1 increments.
        assert_eq!(schedule.cumulative_at(0), 50 * COIN);
        assert_eq!(schedule.cumulative_at(9), 500 * COIN);

        // Full first era: 210 000 blocks at 50 coins.
        assert_eq!(schedule.cumulative_at(209_999), 1_050_000_000_000_000);
        // One block into the second era.
        assert_eq!(
            schedule.cumulative_at(210_000),
            1_050_000_000_000_000 + 25 * COIN
        );
        // Four full eras: 10.5M + 5.25M + 2.625M + 1.3125M coins.
        assert_eq!(schedule.cumulative_at(839_999), 1_968_750_000_000_000);
        // Exactly 20M coins, 100 000 blocks into the fifth era.
        assert_eq!(schedule.cumulative_at(939_999), 2_000_000_000_000_000);
    }

    #[test]
    fn test_cumulative_saturates_at_total() {
        let schedule = IssuanceSchedule::BITCOIN;

        assert_eq!(schedule.cumulative_at(6_929_999), BITCOIN_TOTAL);
        assert_eq!(schedule.cumulative_at(7_000_000), BITCOIN_TOTAL);
        assert_eq!(schedule.cumulative_at(u64::MAX), BITCOIN_TOTAL);
    }

    #[test]
    fn test_cumulative_monotonic() {
        let schedule = IssuanceSchedule::BITCOIN;
        let heights = [
            0u64, 1, 100, 209_999, 210_000, 210_001, 419_999, 420_000, 839_999, 840_000, 939_999,
            6_929_998, 6_929_999, 6_930_000, 10_000_000,
        ];

        let mut prev = 0u64;
        for h in heights {
            let cumulative = schedule.cumulative_at(h);
            assert!(cumulative >= prev, "not monotonic at height {h}");
            prev = cumulative;
        }
    }

    #[test]
    fn test_height_for_threshold_first_crossing() {
        let schedule = IssuanceSchedule::BITCOIN;

        for h in [0u64, 1, 209_999, 210_000, 839_999, 939_999, 6_929_999] {
            let t = schedule.cumulative_at(h);
            let crossing = schedule.height_for_threshold(t).unwrap();
            assert!(crossing <= h, "crossing {crossing} > height {h}");
            assert!(schedule.cumulative_at(crossing) >= t);
            // First crossing: the previous height must still be short.
            if crossing > 0 {
                assert!(schedule.cumulative_at(crossing - 1) < t);
            }
        }
    }

    #[test]
    fn test_height_for_threshold_below_one_era() {
        let schedule = IssuanceSchedule::BITCOIN;
        let subsidy = 50 * COIN;

        // For thresholds within the first era the target is ceil(t / A) - 1.
        for t in [1u64, subsidy - 1, subsidy, subsidy + 1, 1000 * subsidy] {
            let expected = t.div_ceil(subsidy) - 1;
            assert_eq!(schedule.height_for_threshold(t).unwrap(), expected);
        }
    }

    #[test]
    fn test_height_for_threshold_zero() {
        assert_eq!(
            IssuanceSchedule::BITCOIN.height_for_threshold(0).unwrap(),
            0
        );
    }

    #[test]
    fn test_twenty_million_coin_milestone() {
        // 20 000 000 coins: eras 0..=3 issue 19.6875M over 840 000 blocks,
        // the remaining 312 500 coins take exactly 100 000 blocks at 3.125.
        let schedule = IssuanceSchedule::BITCOIN;
        let threshold = 2_000_000_000_000_000;

        assert_eq!(schedule.height_for_threshold(threshold).unwrap(), 939_999);
    }

    #[test]
    fn test_full_supply_milestone() {
        // The full supply lands on the last block with a nonzero subsidy.
        let schedule = IssuanceSchedule::BITCOIN;

        assert_eq!(
            schedule.height_for_threshold(BITCOIN_TOTAL).unwrap(),
            6_929_999
        );
    }

    #[test]
    fn test_unreachable_threshold() {
        let schedule = IssuanceSchedule::BITCOIN;
        let result = schedule.height_for_threshold(BITCOIN_TOTAL + 1);

        assert_eq!(
            result,
            Err(ScheduleError::ThresholdUnreachable {
                threshold: BITCOIN_TOTAL + 1,
                total: BITCOIN_TOTAL,
            })
        );
    }

    #[test]
    fn test_fraction_issued() {
        let schedule = IssuanceSchedule::BITCOIN;

        assert!(schedule.fraction_issued(0) > 0.0);
        // Half the supply is issued by the end of the first era.
        assert!((schedule.fraction_issued(209_999) - 0.5).abs() < 1e-6);
        assert!((schedule.fraction_issued(6_929_999) - 1.0).abs() < f64::EPSILON);
    }
}
