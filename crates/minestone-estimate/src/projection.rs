//! Time projection from blocks remaining to a completion instant.

use chrono::{DateTime, TimeDelta, Utc};

/// Returns the number of blocks between the current height and the target,
/// clamped to zero once the target has been passed.
#[must_use]
pub const fn blocks_remaining(target: u64, current: u64) -> u64 {
    target.saturating_sub(current)
}

/// Projects the completion instant: `anchor + remaining * secs_per_block`.
///
/// Total for finite non-negative rates. With zero blocks remaining the
/// result is exactly `anchor`, independent of the rate; callers render that
/// case as "milestone reached" rather than a countdown. Products too large
/// to represent saturate at [`DateTime::<Utc>::MAX_UTC`].
#[must_use]
pub fn project(remaining: u64, anchor: DateTime<Utc>, secs_per_block: f64) -> DateTime<Utc> {
    if remaining == 0 {
        return anchor;
    }

    let millis = remaining as f64 * secs_per_block * 1000.0;
    if !millis.is_finite() || millis >= i64::MAX as f64 {
        return DateTime::<Utc>::MAX_UTC;
    }

    anchor
        .checked_add_signed(TimeDelta::milliseconds(millis.round() as i64))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn anchor() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn test_zero_remaining_returns_anchor() {
        // Exactly the anchor, whatever the rate.
        for rate in [0.0, 1.0, 600.0, 1e12, f64::NAN] {
            assert_eq!(project(0, anchor(), rate), anchor());
        }
    }

    #[test]
    fn test_projection_arithmetic() {
        let eta = project(100, anchor(), 600.0);
        assert_eq!(eta, anchor() + TimeDelta::seconds(60_000));

        let eta = project(1, anchor(), 600.0);
        assert_eq!(eta, anchor() + TimeDelta::seconds(600));
    }

    #[test]
    fn test_fractional_rate() {
        let eta = project(3, anchor(), 12.5);
        assert_eq!(eta, anchor() + TimeDelta::milliseconds(37_500));
    }

    #[test]
    fn test_saturates_on_overflow() {
        let eta = project(u64::MAX, anchor(), f64::MAX);
        assert_eq!(eta, DateTime::<Utc>::MAX_UTC);
    }

    #[test]
    fn test_blocks_remaining_clamps() {
        assert_eq!(blocks_remaining(100, 40), 60);
        assert_eq!(blocks_remaining(100, 100), 0);
        assert_eq!(blocks_remaining(100, 150), 0);
    }
}
