//! Amount constants and conversions.

/// Base units per whole coin (smallest indivisible denomination).
pub const COIN: u64 = 100_000_000;

/// Converts a whole-coin quantity to base units, rounding to the nearest unit.
///
/// Returns `None` for non-finite or negative inputs, or when the result would
/// not fit in a `u64`.
#[must_use]
pub fn base_units_from_coins(coins: f64) -> Option<u64> {
    if !coins.is_finite() || coins < 0.0 {
        return None;
    }
    let units = (coins * COIN as f64).round();
    if units > u64::MAX as f64 {
        return None;
    }
    Some(units as u64)
}

/// Converts base units to a whole-coin quantity for display.
#[must_use]
pub fn coins_from_base_units(units: u64) -> f64 {
    units as f64 / COIN as f64
}
