//! Core types for the minestone issuance milestone estimator.
//!
//! This crate provides the fundamental data structures used throughout
//! minestone:
//!
//! - [`FeedSample`] - A single (block height, timestamp) observation from the feed
//! - [`RateMode`] - Selection between empirical and nominal block rates
//! - [`Estimate`] - The immutable estimate snapshot (height, rate, anchor, projection)
//! - [`MinestoneError`] - Workspace-wide error type

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/minestone/minestone/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod amount;
mod error;
mod estimate;
mod rate;
mod sample;

pub use amount::{COIN, base_units_from_coins, coins_from_base_units};
pub use error::{MinestoneError, Result};
pub use estimate::Estimate;
pub use rate::RateMode;
pub use sample::{FeedSample, sort_most_recent_first};
