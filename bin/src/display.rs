//! Display utilities and output formatting for the minestone CLI.

use chrono::{DateTime, TimeDelta, Utc};
use clap::ValueEnum;
use minestone_lib::COIN;
use minestone_lib::prelude::*;

/// Output format for reports.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Text,
    Json,
}

/// Rate strategy selection on the command line.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum RateModeArg {
    Empirical,
    Nominal,
}

impl From<RateModeArg> for RateMode {
    fn from(arg: RateModeArg) -> Self {
        match arg {
            RateModeArg::Empirical => Self::Empirical,
            RateModeArg::Nominal => Self::Nominal,
        }
    }
}

/// Groups a number with thousands separators, e.g. "6,929,999".
pub(crate) fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Formats base units as a whole-coin quantity, trimming trailing zeros,
/// e.g. "19,687,500" or "3.125".
pub(crate) fn format_coins(units: u64) -> String {
    let whole = units / COIN;
    let frac = units % COIN;
    if frac == 0 {
        group_thousands(whole)
    } else {
        let frac_digits = format!("{frac:08}");
        format!("{}.{}", group_thousands(whole), frac_digits.trim_end_matches('0'))
    }
}

/// Formats a countdown duration, e.g. "113y 204d", "3d 7h", "45m 12s".
pub(crate) fn format_countdown(delta: TimeDelta) -> String {
    let total_secs = delta.num_seconds().max(0);
    let years = total_secs / 31_536_000;
    let days = (total_secs % 31_536_000) / 86_400;
    let hours = (total_secs % 86_400) / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    if years > 0 {
        format!("{years}y {days}d")
    } else if days > 0 {
        format!("{days}d {hours}h")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}

/// Formats an instant for display.
pub(crate) fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
