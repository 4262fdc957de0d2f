//! HTTP feed client for the minestone issuance milestone estimator.
//!
//! The feed has two endpoints with different shapes:
//!
//! - the primary endpoint returns a JSON batch of recent block records
//!   (height + Unix-seconds timestamp), parsed by [`parse_block_batch`]
//! - the fallback endpoint returns a single plain-text height, parsed by
//!   [`parse_height`]
//!
//! [`FeedClient`] wraps both behind a pooled, timeout-bounded reqwest
//! client. There is no retry logic here: a poll cycle is a single atomic
//! attempt, and the next scheduled poll is the retry mechanism.

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/minestone/minestone/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod wire;

pub use client::{FeedClient, FeedConfig, FeedError};
pub use wire::{ParseError, parse_block_batch, parse_height};
