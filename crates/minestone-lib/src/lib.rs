//! Estimator for fixed-supply issuance milestones.
//!
//! This is a facade crate that re-exports functionality from the minestone
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use minestone_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FeedClient::with_defaults()?;
//!     let mut tracker = MilestoneTracker::new(client, TrackerConfig::default())?;
//!
//!     tracker.poll().await;
//!     let report = tracker.report();
//!     if let Some(projected) = report.projected {
//!         println!("Milestone projected for {projected}");
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/minestone/minestone/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use minestone_types::*;

// Re-export the issuance model
pub use minestone_model::{Era, EraIter, IssuanceSchedule, ScheduleError};

// Re-export estimation and projection
pub use minestone_estimate::{
    NOMINAL_SECS_PER_BLOCK, RateEstimator, blocks_remaining, project,
};

// Re-export the feed client
#[cfg(feature = "feed")]
pub use minestone_feed::{FeedClient, FeedConfig, FeedError, parse_block_batch, parse_height};

// Re-export the tracker
#[cfg(feature = "tracker")]
pub use minestone_tracker::{
    FeedSource, MilestoneReport, MilestoneTracker, PollOutcome, TrackerConfig, TrackerError,
};

/// Prelude module for convenient imports.
///
/// ```
/// use minestone_lib::prelude::*;
/// ```
pub mod prelude {
    pub use minestone_types::{Estimate, FeedSample, MinestoneError, RateMode, Result};

    pub use minestone_model::{IssuanceSchedule, ScheduleError};

    pub use minestone_estimate::{NOMINAL_SECS_PER_BLOCK, RateEstimator, project};

    #[cfg(feature = "feed")]
    pub use minestone_feed::{FeedClient, FeedConfig, FeedError};

    #[cfg(feature = "tracker")]
    pub use minestone_tracker::{
        MilestoneReport, MilestoneTracker, PollOutcome, TrackerConfig, TrackerError,
    };
}
