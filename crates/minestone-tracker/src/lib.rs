//! Feed update coordination and milestone reporting.
//!
//! [`MilestoneTracker`] owns the single estimate snapshot and drives the
//! poll cycle described by the feed protocol: primary batch endpoint first,
//! scalar fallback on any primary failure, stale-but-displayed state when
//! both fail. Every cycle is one atomic attempt; state is replaced whole on
//! success and never edited in place.

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/minestone/minestone/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod report;
mod source;
mod tracker;

pub use report::MilestoneReport;
pub use source::FeedSource;
pub use tracker::{MilestoneTracker, PollOutcome, TrackerConfig, TrackerError};
