//! Pipeline stages, validation, and execution.
//!
//! ## Submodules
//!
//! - [`artifacts`] — Typed outputs exchanged at stage boundaries
//! - [`traits`] — Stage trait definitions and their default implementations
//! - [`runner`] — Pipeline orchestration and artifact threading
//! - [`observer`] — Logging, profiling, and debug hooks
//! - [`validation`] — Input validation rules

pub mod artifacts;
pub mod observer;
pub mod runner;
pub mod traits;
pub mod validation;

pub use artifacts::{InputStats, Summary};

pub use observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, StageReportBuilder,
    StageTimingObserver, STAGES, STAGE_SCORE, STAGE_SEGMENT, STAGE_SELECT, STAGE_TABULATE,
    STAGE_VALIDATE,
};

pub use runner::{Pipeline, PipelineBuilder, StandardPipeline};

pub use traits::{
    DocumentTabulator, InputValidator, PunctuationSegmenter, Scorer, Segmenter, Selector,
    Tabulator, TopNSelector, WeightedScorer,
};

pub use validation::{ValidationEngine, ValidationRule};
