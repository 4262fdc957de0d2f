//! The feed update coordinator.

use std::time::Duration;

use chrono::{DateTime, Utc};
use thiserror::Error;

use minestone_estimate::{NOMINAL_SECS_PER_BLOCK, RateEstimator, blocks_remaining, project};
use minestone_feed::{FeedError, ParseError};
use minestone_model::{IssuanceSchedule, ScheduleError};
use minestone_types::{Estimate, FeedSample, RateMode, sort_most_recent_first};

use crate::report::MilestoneReport;
use crate::source::FeedSource;

/// Configuration for a milestone tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerConfig {
    /// The issuance schedule.
    pub schedule: IssuanceSchedule,
    /// Milestone threshold in base units; `None` targets the schedule's
    /// total issuance.
    pub threshold: Option<u64>,
    /// Initial rate mode.
    pub rate_mode: RateMode,
    /// Nominal fallback rate in seconds per block.
    pub nominal_secs_per_block: f64,
    /// Interval between feed polls.
    pub poll_interval: Duration,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            schedule: IssuanceSchedule::BITCOIN,
            threshold: None,
            rate_mode: RateMode::Empirical,
            nominal_secs_per_block: NOMINAL_SECS_PER_BLOCK,
            poll_interval: Duration::from_secs(30),
        }
    }
}

/// Errors that can occur while constructing a tracker.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    /// The configured threshold cannot be reached by the schedule.
    ///
    /// Schedule and threshold are startup constants, so initialization
    /// aborts rather than proceeding with an undefined target.
    #[error(transparent)]
    Config(#[from] ScheduleError),
}

impl From<TrackerError> for minestone_types::MinestoneError {
    fn from(error: TrackerError) -> Self {
        Self::Config(error.to_string())
    }
}

/// Outcome of one poll cycle.
///
/// The primary/fallback ordering is part of the type so callers see which
/// path produced the state they are rendering.
#[derive(Debug)]
pub enum PollOutcome {
    /// The primary endpoint served a batch.
    Primary {
        /// Current height taken from the batch.
        height: u64,
        /// Whether the estimate snapshot was replaced.
        refreshed: bool,
    },
    /// The primary endpoint failed; the fallback served a scalar height.
    Fallback {
        /// Current height from the fallback endpoint.
        height: u64,
        /// Whether the estimate snapshot was replaced.
        refreshed: bool,
        /// Why the primary path failed.
        primary_error: FeedError,
    },
    /// Both endpoints failed; the last-known estimate is untouched.
    Failed {
        /// Why the primary path failed.
        primary_error: FeedError,
        /// Why the fallback path failed.
        fallback_error: FeedError,
    },
    /// A newer poll already committed; this cycle's result was discarded.
    Stale,
}

impl PollOutcome {
    /// Returns true if the cycle obtained a current height from either
    /// endpoint.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Primary { .. } | Self::Fallback { .. })
    }
}

/// What one fetch attempt produced, before being committed to state.
#[derive(Debug)]
enum FetchResult {
    /// Primary batch, sorted most-recent-first and non-empty.
    Primary {
        top: FeedSample,
        samples: Vec<FeedSample>,
    },
    Fallback {
        height: u64,
        primary_error: FeedError,
    },
    Failed {
        primary_error: FeedError,
        fallback_error: FeedError,
    },
}

/// Coordinates feed polls and owns the estimate snapshot.
///
/// All mutation goes through [`poll`](Self::poll) and
/// [`set_rate_mode`](Self::set_rate_mode); the snapshot is replaced whole,
/// never partially updated, and survives any number of failed cycles.
#[derive(Debug)]
pub struct MilestoneTracker<S> {
    source: S,
    schedule: IssuanceSchedule,
    threshold: u64,
    target_height: u64,
    rate_mode: RateMode,
    estimator: RateEstimator,
    poll_interval: Duration,
    /// Last successfully computed empirical average, kept across polls and
    /// mode switches.
    last_empirical: Option<f64>,
    estimate: Option<Estimate>,
    last_poll: Option<DateTime<Utc>>,
    feed_error: bool,
    next_seq: u64,
    committed_seq: u64,
}

impl<S: FeedSource> MilestoneTracker<S> {
    /// Creates a tracker, solving the target height for the configured
    /// threshold.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Config`] if the threshold exceeds the
    /// schedule's total issuance.
    pub fn new(source: S, config: TrackerConfig) -> Result<Self, TrackerError> {
        let threshold = config
            .threshold
            .unwrap_or_else(|| config.schedule.total_issuance());
        let target_height = config.schedule.height_for_threshold(threshold)?;

        Ok(Self {
            source,
            schedule: config.schedule,
            threshold,
            target_height,
            rate_mode: config.rate_mode,
            estimator: RateEstimator::new(config.nominal_secs_per_block),
            poll_interval: config.poll_interval,
            last_empirical: None,
            estimate: None,
            last_poll: None,
            feed_error: false,
            next_seq: 0,
            committed_seq: 0,
        })
    }

    /// Returns the height at which the threshold is first crossed.
    #[must_use]
    pub const fn target_height(&self) -> u64 {
        self.target_height
    }

    /// Returns the milestone threshold in base units.
    #[must_use]
    pub const fn threshold(&self) -> u64 {
        self.threshold
    }

    /// Returns the issuance schedule.
    #[must_use]
    pub const fn schedule(&self) -> &IssuanceSchedule {
        &self.schedule
    }

    /// Returns the active rate mode.
    #[must_use]
    pub const fn rate_mode(&self) -> RateMode {
        self.rate_mode
    }

    /// Returns the configured poll interval.
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Returns the current estimate snapshot, if any poll has succeeded.
    #[must_use]
    pub const fn estimate(&self) -> Option<&Estimate> {
        self.estimate.as_ref()
    }

    /// Runs one poll cycle: primary endpoint, fallback on failure, stale
    /// state on total failure.
    ///
    /// Never fails past this boundary; every error is folded into the
    /// returned [`PollOutcome`].
    pub async fn poll(&mut self) -> PollOutcome {
        let seq = self.begin_poll();
        let fetched = self.fetch_once().await;
        self.apply(seq, fetched)
    }

    /// Switches the rate mode and immediately recomputes the projection
    /// from the existing anchor. No feed poll is involved.
    pub fn set_rate_mode(&mut self, mode: RateMode) {
        self.rate_mode = mode;

        if let Some(current) = self.estimate {
            let rate = self.active_rate();
            if rate != current.secs_per_block {
                let remaining = blocks_remaining(self.target_height, current.height);
                let projected = project(remaining, current.anchor, rate);
                self.estimate = Some(Estimate::new(
                    current.height,
                    rate,
                    current.anchor,
                    projected,
                ));
            }
        }
    }

    /// Assembles the report for the presentation layer.
    #[must_use]
    pub fn report(&self) -> MilestoneReport {
        let issued = self
            .estimate
            .map(|e| self.schedule.cumulative_at(e.height));

        MilestoneReport {
            height: self.estimate.map(|e| e.height),
            feed_error: self.feed_error,
            target_height: self.target_height,
            threshold: self.threshold,
            blocks_remaining: self
                .estimate
                .map(|e| blocks_remaining(self.target_height, e.height)),
            issued,
            issuance_remaining: issued.map(|i| self.threshold.saturating_sub(i)),
            progress: issued.map(|i| {
                if self.threshold == 0 {
                    1.0
                } else {
                    (i as f64 / self.threshold as f64).min(1.0)
                }
            }),
            reached: self
                .estimate
                .is_some_and(|e| e.reached(self.target_height)),
            projected: self.estimate.map(|e| e.projected),
            secs_per_block: self.estimate.map(|e| e.secs_per_block),
            rate_mode: self.rate_mode,
            last_poll: self.last_poll,
        }
    }

    /// Issues the sequence number for a new poll cycle.
    fn begin_poll(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    /// One atomic fetch attempt across both endpoints. No state is touched.
    async fn fetch_once(&self) -> FetchResult {
        let primary_error = match self.source.recent_blocks().await {
            Ok(mut samples) => {
                sort_most_recent_first(&mut samples);
                match samples.first().copied() {
                    Some(top) => return FetchResult::Primary { top, samples },
                    None => FeedError::Parse(ParseError::Empty),
                }
            }
            Err(e) => e,
        };

        match self.source.current_height().await {
            Ok(height) => FetchResult::Fallback {
                height,
                primary_error,
            },
            Err(fallback_error) => FetchResult::Failed {
                primary_error,
                fallback_error,
            },
        }
    }

    /// Commits a fetch result, discarding it if a newer poll has already
    /// committed.
    fn apply(&mut self, seq: u64, fetched: FetchResult) -> PollOutcome {
        if seq <= self.committed_seq {
            return PollOutcome::Stale;
        }
        self.committed_seq = seq;

        match fetched {
            FetchResult::Primary { top, samples } => {
                if let Some(average) = self.estimator.estimate(&samples) {
                    self.last_empirical = Some(average);
                }

                let rate = self.active_rate();
                let refreshed = self.estimate.is_none_or(|e| {
                    top.height != e.height
                        || top.timestamp != e.anchor
                        || rate != e.secs_per_block
                });
                if refreshed {
                    let remaining = blocks_remaining(self.target_height, top.height);
                    let projected = project(remaining, top.timestamp, rate);
                    self.estimate = Some(Estimate::new(top.height, rate, top.timestamp, projected));
                }

                self.feed_error = false;
                self.last_poll = Some(Utc::now());
                PollOutcome::Primary {
                    height: top.height,
                    refreshed,
                }
            }
            FetchResult::Fallback {
                height,
                primary_error,
            } => {
                // No sample batch on this path: rate estimation is skipped
                // and no feed timestamp is available, so the anchor is the
                // wall clock of the fallback response.
                let refreshed = self.estimate.is_none_or(|e| height != e.height);
                if refreshed {
                    let rate = self.active_rate();
                    let anchor = Utc::now();
                    let remaining = blocks_remaining(self.target_height, height);
                    let projected = project(remaining, anchor, rate);
                    self.estimate = Some(Estimate::new(height, rate, anchor, projected));
                }

                self.feed_error = false;
                self.last_poll = Some(Utc::now());
                PollOutcome::Fallback {
                    height,
                    refreshed,
                    primary_error,
                }
            }
            FetchResult::Failed {
                primary_error,
                fallback_error,
            } => {
                self.feed_error = true;
                PollOutcome::Failed {
                    primary_error,
                    fallback_error,
                }
            }
        }
    }

    /// The rate the active mode currently selects.
    fn active_rate(&self) -> f64 {
        match self.rate_mode {
            RateMode::Nominal => self.estimator.nominal(),
            RateMode::Empirical => self.last_empirical.unwrap_or(self.estimator.nominal()),
        }
    }
}
