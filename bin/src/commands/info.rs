//! Schedule info command.

use anyhow::{Context, Result};
use minestone_lib::base_units_from_coins;
use minestone_lib::prelude::*;

use crate::display::{format_coins, group_thousands};

/// Show the issuance schedule: per-era subsidies and cumulative issuance.
pub(crate) fn show_schedule(subsidy: f64, era_length: u64) -> Result<()> {
    let initial = base_units_from_coins(subsidy).context("Invalid subsidy amount")?;
    let schedule = IssuanceSchedule::new(initial, era_length)?;

    println!(
        "Initial subsidy: {} coins/block",
        format_coins(schedule.initial_subsidy())
    );
    println!(
        "Era length:      {} blocks",
        group_thousands(schedule.era_length())
    );
    println!("Eras:            {}", schedule.era_count());
    println!(
        "Total issuance:  {} coins",
        format_coins(schedule.total_issuance())
    );

    println!();
    println!(
        "{:<5} {:>12} {:>16} {:>22}",
        "ERA", "START", "SUBSIDY", "CUMULATIVE"
    );
    println!("{}", "-".repeat(58));

    for era in schedule.eras() {
        let era_end = era.start + schedule.era_length() - 1;
        println!(
            "{:<5} {:>12} {:>16} {:>22}",
            era.index,
            group_thousands(era.start),
            format_coins(era.subsidy),
            format_coins(schedule.cumulative_at(era_end)),
        );
    }

    Ok(())
}
