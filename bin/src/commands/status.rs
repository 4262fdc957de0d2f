//! Milestone status command.

use anyhow::Result;
use chrono::Utc;
use minestone_lib::prelude::*;

use crate::display::{self, Format, RateModeArg};

/// Poll the feed once and print the milestone report.
pub(crate) async fn status(
    threshold: Option<f64>,
    rate_mode: RateModeArg,
    format: Format,
    primary_url: Option<String>,
    fallback_url: Option<String>,
) -> Result<()> {
    let mut tracker =
        super::build_tracker(threshold, rate_mode, 600.0, 30, primary_url, fallback_url)?;

    let outcome = tracker.poll().await;
    if let PollOutcome::Failed {
        primary_error,
        fallback_error,
    } = &outcome
    {
        eprintln!(
            "Warning: feed unavailable (primary: {primary_error}; fallback: {fallback_error})"
        );
    }

    let report = tracker.report();
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        Format::Text => print_report(&report),
    }

    Ok(())
}

fn print_report(report: &MilestoneReport) {
    match report.height {
        Some(height) => println!("Height:           {}", display::group_thousands(height)),
        None => println!("Height:           unavailable"),
    }
    if report.feed_error {
        println!("Feed:             error (showing last known state)");
    }

    println!(
        "Target height:    {}",
        display::group_thousands(report.target_height)
    );
    println!(
        "Threshold:        {} coins",
        display::format_coins(report.threshold)
    );

    if let Some(issued) = report.issued {
        println!("Issued:           {} coins", display::format_coins(issued));
    }
    if let Some(remaining) = report.issuance_remaining {
        println!("Remaining:        {} coins", display::format_coins(remaining));
    }
    if let Some(blocks) = report.blocks_remaining {
        println!("Blocks remaining: {}", display::group_thousands(blocks));
    }
    if let Some(progress) = report.progress {
        println!("Progress:         {:.4}%", progress * 100.0);
    }
    if let Some(rate) = report.secs_per_block {
        println!("Rate:             {rate:.1}s/block ({})", report.rate_mode);
    }

    if report.reached {
        println!("Milestone:        reached");
    } else if let Some(projected) = report.projected {
        println!(
            "Projected:        {} (in {})",
            display::format_timestamp(projected),
            display::format_countdown(projected - Utc::now()),
        );
    }

    if let Some(last) = report.last_poll {
        println!("Last poll:        {}", display::format_timestamp(last));
    }
}
