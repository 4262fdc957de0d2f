//! Live countdown display.

use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use minestone_lib::prelude::*;

use crate::display::{self, RateModeArg};

/// Progress bar resolution in basis points.
const PROGRESS_SCALE: u64 = 10_000;

/// Run the live countdown until the milestone is reached.
#[allow(clippy::too_many_arguments)]
pub(crate) async fn watch(
    threshold: Option<f64>,
    rate_mode: RateModeArg,
    poll_interval: u64,
    nominal_rate: f64,
    primary_url: Option<String>,
    fallback_url: Option<String>,
    quiet: bool,
) -> Result<()> {
    let mut tracker = super::build_tracker(
        threshold,
        rate_mode,
        nominal_rate,
        poll_interval,
        primary_url,
        fallback_url,
    )?;

    let bar = if quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(PROGRESS_SCALE)
    };
    bar.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {percent:>3}% {msg}")?
            .progress_chars("##-"),
    );

    let mut poll_timer = tokio::time::interval(tracker.poll_interval());
    let mut display_timer = tokio::time::interval(Duration::from_secs(1));

    loop {
        tokio::select! {
            _ = poll_timer.tick() => {
                tracker.poll().await;
                render(&bar, &tracker.report());
            }
            _ = display_timer.tick() => {
                // Display ticks re-render from existing state only; the feed
                // is never touched here.
                render(&bar, &tracker.report());
            }
        }

        if tracker.report().reached {
            bar.finish_with_message("milestone reached");
            return Ok(());
        }
    }
}

fn render(bar: &ProgressBar, report: &MilestoneReport) {
    if let Some(progress) = report.progress {
        bar.set_position((progress * PROGRESS_SCALE as f64) as u64);
    }

    let mut msg = match (report.height, report.projected) {
        (Some(height), Some(projected)) => format!(
            "height {} | {} blocks left | ETA {} (in {})",
            display::group_thousands(height),
            display::group_thousands(report.blocks_remaining.unwrap_or(0)),
            display::format_timestamp(projected),
            display::format_countdown(projected - Utc::now()),
        ),
        _ => "waiting for first successful poll".to_string(),
    };
    if report.feed_error {
        msg.push_str(" [feed error, stale]");
    }
    bar.set_message(msg);
}
