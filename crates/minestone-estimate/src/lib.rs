//! Block rate estimation and milestone time projection.
//!
//! Two small, pure pieces:
//!
//! - [`RateEstimator`] - derives a trailing empirical average of seconds per
//!   block from a feed sample window, with a fixed nominal fallback
//! - [`project`] - turns blocks remaining, an anchor instant, and a rate into
//!   a projected completion instant

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/minestone/minestone/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod projection;
mod rate;

pub use projection::{blocks_remaining, project};
pub use rate::{NOMINAL_SECS_PER_BLOCK, RateEstimator};
