//! Scheduled retry around transcript extraction.
//!
//! The transcript panel renders asynchronously after the user opens it, so a
//! single extraction attempt usually comes up empty. The poller probes the
//! extractor on a fixed schedule until text appears or the budget runs out.

use crate::defaults;
use crate::error::Result;
use crate::transcript::TranscriptSource;
use crate::transcript::extractor::{SegmentSource, TranscriptExtractor};
use async_trait::async_trait;
use std::time::Duration;

/// Retry budget for transcript polling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollConfig {
    /// Number of extraction probes before giving up.
    pub max_attempts: u32,
    /// Delay between probes.
    pub interval: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            max_attempts: defaults::POLL_MAX_ATTEMPTS,
            interval: Duration::from_millis(defaults::POLL_INTERVAL_MS),
        }
    }
}

/// Poller state. `Found` and `Exhausted` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    Probing,
    Found,
    Exhausted,
}

/// Repeatedly invokes the extractor until it yields text or the retry
/// budget is exhausted.
pub struct TranscriptPoller<S: SegmentSource> {
    extractor: TranscriptExtractor<S>,
    config: PollConfig,
    state: PollState,
}

impl<S: SegmentSource> TranscriptPoller<S> {
    /// Creates a poller with the default budget (10 probes, 500 ms apart).
    pub fn new(source: S) -> Self {
        Self::with_config(source, PollConfig::default())
    }

    pub fn with_config(source: S, config: PollConfig) -> Self {
        Self {
            extractor: TranscriptExtractor::new(source),
            config,
            state: PollState::Probing,
        }
    }

    pub fn state(&self) -> PollState {
        self.state
    }

    /// Probe until the transcript appears or `max_attempts` probes have
    /// failed. Between probes the task suspends for the configured interval;
    /// no delay follows the final probe.
    ///
    /// `None` is a normal terminal outcome meaning "transcript unavailable",
    /// not an error.
    pub async fn poll(&mut self) -> Option<String> {
        for attempt in 1..=self.config.max_attempts {
            if let Some(text) = self.extractor.extract() {
                self.state = PollState::Found;
                return Some(text);
            }
            if attempt < self.config.max_attempts {
                tokio::time::sleep(self.config.interval).await;
            }
        }

        self.state = PollState::Exhausted;
        None
    }
}

#[async_trait]
impl<S: SegmentSource> TranscriptSource for TranscriptPoller<S> {
    async fn transcript(&mut self) -> Result<Option<String>> {
        Ok(self.poll().await)
    }
}
