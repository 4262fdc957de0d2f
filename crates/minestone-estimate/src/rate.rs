//! Empirical block rate estimation.

use minestone_types::FeedSample;

/// Nominal block spacing in seconds (the chain's ten-minute target).
pub const NOMINAL_SECS_PER_BLOCK: f64 = 600.0;

/// Derives an average time-per-block from a trailing sample window.
///
/// The estimator is stateless: the average is recomputed fresh from each
/// feed snapshot. When a window is unusable the estimator yields `None` and
/// the caller retains whatever rate was previously active (the first call
/// falls back to the nominal rate).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateEstimator {
    nominal_secs_per_block: f64,
}

impl RateEstimator {
    /// Creates an estimator with the given nominal fallback rate.
    #[must_use]
    pub const fn new(nominal_secs_per_block: f64) -> Self {
        Self {
            nominal_secs_per_block,
        }
    }

    /// Returns the nominal fallback rate in seconds per block.
    #[must_use]
    pub const fn nominal(&self) -> f64 {
        self.nominal_secs_per_block
    }

    /// Computes the average interval in seconds over a most-recent-first
    /// sample window.
    ///
    /// Adjacent pairs with a non-positive timestamp delta are feed artifacts
    /// (duplicated or out-of-order timestamps) and are excluded from the
    /// average. Returns `None` when the window has fewer than two entries or
    /// no valid interval survives the filter.
    #[must_use]
    pub fn estimate(&self, samples: &[FeedSample]) -> Option<f64> {
        if samples.len() < 2 {
            return None;
        }

        let mut sum = 0i64;
        let mut count = 0u32;
        for pair in samples.windows(2) {
            let delta = (pair[0].timestamp - pair[1].timestamp).num_seconds();
            if delta > 0 {
                sum += delta;
                count += 1;
            }
        }

        if count == 0 {
            None
        } else {
            Some(sum as f64 / f64::from(count))
        }
    }
}

impl Default for RateEstimator {
    fn default() -> Self {
        Self::new(NOMINAL_SECS_PER_BLOCK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{TimeZone, Utc};

    /// Builds a most-recent-first window of `len` samples spaced `spacing`
    /// seconds apart, newest at `base` seconds.
    fn spaced_window(len: usize, spacing: i64, base: i64) -> Vec<FeedSample> {
        (0..len)
            .map(|i| {
                FeedSample::new(
                    (1000 - i) as u64,
                    Utc.timestamp_opt(base - i as i64 * spacing, 0).unwrap(),
                )
            })
            .collect()
    }

    #[test]
    fn test_uniform_spacing_is_exact() {
        let estimator = RateEstimator::default();

        // A strictly 600-spaced window averages to exactly 600 regardless of
        // window length.
        for len in [2usize, 3, 10, 100] {
            let window = spaced_window(len, 600, 1_700_000_000);
            assert_eq!(estimator.estimate(&window), Some(600.0));
        }
    }

    #[test]
    fn test_mixed_intervals() {
        let estimator = RateEstimator::default();
        let mut window = spaced_window(2, 600, 1_700_000_000);
        window.push(FeedSample::new(
            997,
            Utc.timestamp_opt(1_700_000_000 - 600 - 1200, 0).unwrap(),
        ));

        let avg = estimator.estimate(&window).unwrap();
        assert_relative_eq!(avg, 900.0);
    }

    #[test]
    fn test_equal_timestamps_yield_none() {
        let estimator = RateEstimator::default();
        let ts = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let window = vec![
            FeedSample::new(1000, ts),
            FeedSample::new(999, ts),
            FeedSample::new(998, ts),
        ];

        assert_eq!(estimator.estimate(&window), None);
    }

    #[test]
    fn test_short_window_yields_none() {
        let estimator = RateEstimator::default();

        assert_eq!(estimator.estimate(&[]), None);
        assert_eq!(
            estimator.estimate(&spaced_window(1, 600, 1_700_000_000)),
            None
        );
    }

    #[test]
    fn test_out_of_order_timestamps_are_filtered() {
        let estimator = RateEstimator::default();
        let base = 1_700_000_000;
        let window = vec![
            FeedSample::new(1000, Utc.timestamp_opt(base, 0).unwrap()),
            // Out of order: newer timestamp on an older block.
            FeedSample::new(999, Utc.timestamp_opt(base + 50, 0).unwrap()),
            FeedSample::new(998, Utc.timestamp_opt(base - 600, 0).unwrap()),
        ];

        // Only the 999 -> 998 interval (650s) is a valid sample.
        let avg = estimator.estimate(&window).unwrap();
        assert_relative_eq!(avg, 650.0);
    }

    #[test]
    fn test_nominal_accessor() {
        assert_relative_eq!(RateEstimator::default().nominal(), 600.0);
        assert_relative_eq!(RateEstimator::new(150.0).nominal(), 150.0);
    }
}
