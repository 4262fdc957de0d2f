//! Benchmark fixtures for minestone.

use minestone_model::IssuanceSchedule;

/// Heights spanning the whole schedule, from genesis past the last
/// subsidy-bearing era.
pub fn sample_heights() -> Vec<u64> {
    vec![0, 209_999, 839_999, 939_999, 3_500_000, 6_929_999, 10_000_000]
}

/// Thresholds spanning the full issuance range of the given schedule.
pub fn sample_thresholds(schedule: &IssuanceSchedule) -> Vec<u64> {
    let total = schedule.total_issuance();
    vec![1, total / 4, total / 2, (total / 4) * 3, total]
}
