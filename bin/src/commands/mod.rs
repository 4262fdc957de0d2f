//! CLI command implementations.

use std::time::Duration;

use anyhow::{Context, Result};
use minestone_lib::base_units_from_coins;
use minestone_lib::prelude::*;

use crate::display::RateModeArg;

pub(crate) mod info;
pub(crate) mod status;
pub(crate) mod target;
pub(crate) mod watch;

/// Builds a tracker over the HTTP feed from command-line options.
pub(crate) fn build_tracker(
    threshold_coins: Option<f64>,
    rate_mode: RateModeArg,
    nominal_rate: f64,
    poll_interval_secs: u64,
    primary_url: Option<String>,
    fallback_url: Option<String>,
) -> Result<MilestoneTracker<FeedClient>> {
    let threshold = threshold_coins
        .map(|coins| base_units_from_coins(coins).context("Invalid threshold amount"))
        .transpose()?;

    let mut feed_config = FeedConfig::default();
    if let Some(url) = primary_url {
        feed_config.primary_url = url;
    }
    if let Some(url) = fallback_url {
        feed_config.fallback_url = url;
    }

    let client = FeedClient::new(feed_config).context("Failed to create feed client")?;

    let config = TrackerConfig {
        threshold,
        rate_mode: rate_mode.into(),
        nominal_secs_per_block: nominal_rate,
        poll_interval: Duration::from_secs(poll_interval_secs),
        ..TrackerConfig::default()
    };

    MilestoneTracker::new(client, config).context("Invalid milestone configuration")
}
