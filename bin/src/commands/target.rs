//! Target height solver command.

use anyhow::{Context, Result};
use minestone_lib::base_units_from_coins;
use minestone_lib::prelude::*;

use crate::display::{format_coins, group_thousands};

/// Solve the target height for a threshold, purely from the schedule.
pub(crate) fn solve_target(threshold: f64, subsidy: f64, era_length: u64) -> Result<()> {
    let units = base_units_from_coins(threshold).context("Invalid threshold amount")?;
    let initial = base_units_from_coins(subsidy).context("Invalid subsidy amount")?;
    let schedule = IssuanceSchedule::new(initial, era_length)?;

    let target = schedule
        .height_for_threshold(units)
        .context("Threshold is unreachable for this schedule")?;

    println!("Threshold:       {} coins", format_coins(units));
    println!("Target height:   {}", group_thousands(target));
    println!("Crossing era:    {}", target / schedule.era_length());
    println!(
        "Subsidy there:   {} coins/block",
        format_coins(schedule.subsidy_at(target))
    );
    println!(
        "Issued by then:  {} coins",
        format_coins(schedule.cumulative_at(target))
    );

    Ok(())
}
