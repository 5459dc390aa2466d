//! Pipeline observer — hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Timing is collected for diagnostics only and never feeds
//! back into the result.

use std::time::{Duration, Instant};

use crate::errors::SummarizeError;
use crate::summarizer::WordFrequencyTable;
use crate::types::{ScoredSentence, Sentence};

pub const STAGE_VALIDATE: &str = "validate";
pub const STAGE_SEGMENT: &str = "segment";
pub const STAGE_TABULATE: &str = "tabulate";
pub const STAGE_SCORE: &str = "score";
pub const STAGE_SELECT: &str = "select";

/// Every stage, in execution order.
pub const STAGES: [&str; 5] = [
    STAGE_VALIDATE,
    STAGE_SEGMENT,
    STAGE_TABULATE,
    STAGE_SCORE,
    STAGE_SELECT,
];

// ============================================================================
// Stage timing
// ============================================================================

/// Wall-clock timer for one stage.
#[derive(Debug, Clone, Copy)]
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// What a stage did and how long it took.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageReport {
    elapsed: Duration,
    items: Option<usize>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            items: None,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of items the stage produced (words, sentences, terms, ...)
    pub fn items(&self) -> Option<usize> {
        self.items
    }
}

/// Builder for a [`StageReport`] with optional counters.
#[derive(Debug, Clone)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            report: StageReport::new(elapsed),
        }
    }

    pub fn items(mut self, items: usize) -> Self {
        self.report.items = Some(items);
        self
    }

    pub fn build(self) -> StageReport {
        self.report
    }
}

// ============================================================================
// Observer trait
// ============================================================================

/// Callbacks fired by [`Pipeline::run`](super::runner::Pipeline::run).
///
/// Every method has an empty default, so implementors override only what
/// they need.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    fn on_sentences(&mut self, _sentences: &[Sentence]) {}

    fn on_frequencies(&mut self, _table: &WordFrequencyTable) {}

    fn on_scores(&mut self, _scored: &[ScoredSentence]) {}

    /// The run stopped in `stage`; no later callback follows.
    fn on_failure(&mut self, _stage: &'static str, _error: &SummarizeError) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that records the report of every completed stage.
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
    failed_stage: Option<&'static str>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(stage, report)` pairs in execution order
    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    /// Report for a stage, if it completed
    pub fn report(&self, stage: &str) -> Option<&StageReport> {
        self.reports
            .iter()
            .find(|(name, _)| *name == stage)
            .map(|(_, report)| report)
    }

    /// Stage the run failed in, if any
    pub fn failed_stage(&self) -> Option<&'static str> {
        self.failed_stage
    }

    /// Sum of all recorded stage durations
    pub fn total_elapsed(&self) -> Duration {
        self.reports.iter().map(|(_, r)| r.elapsed()).sum()
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }

    fn on_failure(&mut self, stage: &'static str, _error: &SummarizeError) {
        self.failed_stage = Some(stage);
    }
}
