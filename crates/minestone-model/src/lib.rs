//! Halving-based issuance schedule arithmetic.
//!
//! The model is purely arithmetic: an [`IssuanceSchedule`] describes a
//! geometric reward schedule (a fixed per-block subsidy, halved every fixed
//! number of blocks until it floors to zero), and every operation on it is a
//! deterministic closed-form walk over the eras.
//!
//! - [`IssuanceSchedule::cumulative_at`] - total units issued through a height
//! - [`IssuanceSchedule::height_for_threshold`] - first height crossing a threshold
//! - [`IssuanceSchedule::total_issuance`] - finite total over all eras
//! - [`IssuanceSchedule::eras`] - iterator over the nonzero-subsidy eras

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/minestone/minestone/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod era;
mod schedule;

pub use era::{Era, EraIter};
pub use schedule::{IssuanceSchedule, ScheduleError};
