//! Pipeline runner — orchestrates stage execution and artifact flow.
//!
//! The [`Pipeline`] struct holds a statically-composed set of stages. Calling
//! [`Pipeline::run`] executes them in order, threading artifacts between
//! stages and notifying a [`PipelineObserver`] at each boundary.
//!
//! The run is a synchronous state machine:
//!
//! ```text
//! Idle → Validating → (Failed | Segmenting → Scoring → Selecting → Done)
//! ```
//!
//! where "Scoring" covers both the tabulate and score stages. A failure in any
//! stage ends the run with an error and no partial summary.

use crate::errors::{ProcessingError, Result, SummarizeError};
use crate::nlp::stopwords::StopwordFilter;
use crate::pipeline::artifacts::Summary;
use crate::pipeline::observer::{
    PipelineObserver, StageClock, StageReportBuilder, STAGE_SCORE, STAGE_SEGMENT,
    STAGE_SELECT, STAGE_TABULATE, STAGE_VALIDATE,
};
use crate::pipeline::traits::{
    DocumentTabulator, InputValidator, PunctuationSegmenter, Scorer, Segmenter, Selector,
    Tabulator, TopNSelector, WeightedScorer,
};
use crate::pipeline::validation::ValidationEngine;
use crate::types::{LengthPolicy, ScoredSentence, Sentence, SummarizerConfig};

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// Notify the observer of a failure and hand the error back for `?`.
fn fail(
    observer: &mut impl PipelineObserver,
    stage: &'static str,
    error: impl Into<SummarizeError>,
) -> SummarizeError {
    let error = error.into();
    observer.on_failure(stage, &error);
    error
}

// ============================================================================
// Pipeline — statically-composed stage container
// ============================================================================

/// A pipeline composed of concrete stage implementations.
///
/// | Param | Trait | Default impl |
/// |-------|-------|--------------|
/// | `V`   | [`InputValidator`] | [`ValidationEngine`] |
/// | `Seg` | [`Segmenter`] | [`PunctuationSegmenter`] |
/// | `Tab` | [`Tabulator`] | [`DocumentTabulator`] |
/// | `Sc`  | [`Scorer`] | [`WeightedScorer`] |
/// | `Sel` | [`Selector`] | [`TopNSelector`] |
#[derive(Debug, Clone)]
pub struct Pipeline<V, Seg, Tab, Sc, Sel> {
    pub validator: V,
    pub segmenter: Seg,
    pub tabulator: Tab,
    pub scorer: Sc,
    pub selector: Sel,
}

/// Type alias for the standard frequency summarization pipeline.
pub type StandardPipeline = Pipeline<
    ValidationEngine,
    PunctuationSegmenter,
    DocumentTabulator,
    WeightedScorer,
    TopNSelector,
>;

impl StandardPipeline {
    /// Build the standard pipeline:
    /// - Non-empty and minimum-word validation
    /// - Punctuation + capital segmentation
    /// - Whole-document frequency table
    /// - Frequency sum with lead and numeric boosts
    /// - Top-N selection restored to document order
    pub fn standard() -> Self {
        Pipeline {
            validator: ValidationEngine::with_defaults(),
            segmenter: PunctuationSegmenter,
            tabulator: DocumentTabulator,
            scorer: WeightedScorer,
            selector: TopNSelector,
        }
    }
}

impl Default for StandardPipeline {
    fn default() -> Self {
        Self::standard()
    }
}

// ============================================================================
// Pipeline::run — execute stages in order
// ============================================================================

impl<V, Seg, Tab, Sc, Sel> Pipeline<V, Seg, Tab, Sc, Sel>
where
    V: InputValidator,
    Seg: Segmenter,
    Tab: Tabulator,
    Sc: Scorer,
    Sel: Selector,
{
    /// Execute the pipeline, producing a [`Summary`].
    ///
    /// Stages run in order:
    /// 1. Validate the raw text
    /// 2. Segment into sentences
    /// 3. Tabulate word frequencies over the whole text
    /// 4. Score every sentence
    /// 5. Select the top sentences and restore document order
    ///
    /// Pass [`NoopObserver`](super::observer::NoopObserver) when no callbacks
    /// are needed.
    pub fn run(
        &self,
        text: &str,
        policy: LengthPolicy,
        cfg: &SummarizerConfig,
        observer: &mut impl PipelineObserver,
    ) -> Result<Summary> {
        // Stage 0: Validate
        let stats = {
            trace_stage!(STAGE_VALIDATE);
            observer.on_stage_start(STAGE_VALIDATE);
            let clock = StageClock::start();
            let stats = self
                .validator
                .validate(text, cfg)
                .map_err(|e| fail(observer, STAGE_VALIDATE, e))?;
            let report = StageReportBuilder::new(clock.elapsed())
                .items(stats.words)
                .build();
            observer.on_stage_end(STAGE_VALIDATE, &report);
            stats
        };

        // Stage 1: Segment
        let sentences = {
            trace_stage!(STAGE_SEGMENT);
            observer.on_stage_start(STAGE_SEGMENT);
            let clock = StageClock::start();
            let sentences = self
                .segmenter
                .segment(text, cfg)
                .and_then(check_segmentation)
                .map_err(|e| fail(observer, STAGE_SEGMENT, e))?;
            let report = StageReportBuilder::new(clock.elapsed())
                .items(sentences.len())
                .build();
            observer.on_stage_end(STAGE_SEGMENT, &report);
            observer.on_sentences(&sentences);
            #[cfg(feature = "tracing")]
            tracing::debug!(
                sentences = sentences.len(),
                words = stats.words,
                "segmented input"
            );
            sentences
        };

        let stopwords = StopwordFilter::from_config(cfg);

        // Stage 2: Tabulate
        let table = {
            trace_stage!(STAGE_TABULATE);
            observer.on_stage_start(STAGE_TABULATE);
            let clock = StageClock::start();
            let table = self.tabulator.tabulate(text, &stopwords, cfg);
            let report = StageReportBuilder::new(clock.elapsed())
                .items(table.len())
                .build();
            observer.on_stage_end(STAGE_TABULATE, &report);
            observer.on_frequencies(&table);
            #[cfg(feature = "tracing")]
            tracing::debug!(
                terms = table.len(),
                occurrences = table.total(),
                "tabulated frequencies"
            );
            table
        };

        // Stage 3: Score
        let scored = {
            trace_stage!(STAGE_SCORE);
            observer.on_stage_start(STAGE_SCORE);
            let clock = StageClock::start();
            let scored = self.scorer.score(&sentences, &table, &stopwords, cfg);
            check_scores(&sentences, &scored)
                .map_err(|e| fail(observer, STAGE_SCORE, e))?;
            let report = StageReportBuilder::new(clock.elapsed())
                .items(scored.len())
                .build();
            observer.on_stage_end(STAGE_SCORE, &report);
            observer.on_scores(&scored);
            scored
        };

        // Stage 4: Select
        trace_stage!(STAGE_SELECT);
        observer.on_stage_start(STAGE_SELECT);
        let clock = StageClock::start();
        let result = self.selector.select(&scored, policy, cfg);
        check_selection(&result.sentences)
            .map_err(|e| fail(observer, STAGE_SELECT, e))?;
        let report = StageReportBuilder::new(clock.elapsed())
            .items(result.sentences.len())
            .build();
        observer.on_stage_end(STAGE_SELECT, &report);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            policy = policy.as_str(),
            target = result.target,
            selected = result.sentences.len(),
            "selected summary sentences"
        );

        Ok(Summary {
            text: result.text(),
            sentences: result.sentences,
            length: policy,
            total_sentences: sentences.len(),
            word_count: stats.words,
        })
    }
}

// ============================================================================
// Invariant checks between stages
// ============================================================================

fn check_segmentation(
    sentences: Vec<Sentence>,
) -> std::result::Result<Vec<Sentence>, ProcessingError> {
    if sentences.is_empty() {
        return Err(ProcessingError::NoSentences);
    }
    if let Some((pos, s)) = sentences
        .iter()
        .enumerate()
        .find(|(pos, s)| s.index != *pos)
    {
        return Err(ProcessingError::unexpected(format!(
            "sentence at position {pos} has index {}",
            s.index
        )));
    }
    Ok(sentences)
}

fn check_scores(
    sentences: &[Sentence],
    scored: &[ScoredSentence],
) -> std::result::Result<(), ProcessingError> {
    if scored.len() != sentences.len() {
        return Err(ProcessingError::unexpected(format!(
            "scored {} of {} sentences",
            scored.len(),
            sentences.len()
        )));
    }
    let reordered = scored
        .iter()
        .zip(sentences)
        .any(|(s, original)| s.sentence.index != original.index);
    if reordered {
        return Err(ProcessingError::unexpected("scoring reordered sentences"));
    }
    if let Some(bad) = scored.iter().find(|s| !s.score.is_finite()) {
        return Err(ProcessingError::unexpected(format!(
            "sentence {} has non-finite score {}",
            bad.sentence.index, bad.score
        )));
    }
    Ok(())
}

fn check_selection(selected: &[ScoredSentence]) -> std::result::Result<(), ProcessingError> {
    if selected.is_empty() {
        return Err(ProcessingError::unexpected("selection is empty"));
    }
    if selected.windows(2).any(|w| w[0].sentence.index >= w[1].sentence.index) {
        return Err(ProcessingError::unexpected(
            "selected sentences are not in document order",
        ));
    }
    Ok(())
}

// ============================================================================
// PipelineBuilder — fluent construction with custom stages
// ============================================================================

/// Fluent builder for constructing a [`Pipeline`] with custom stages.
///
/// Starts from the standard stages and allows overriding individual ones.
///
/// ```
/// # use rapid_summarizer::pipeline::runner::PipelineBuilder;
/// # use rapid_summarizer::pipeline::traits::*;
/// let pipeline = PipelineBuilder::new()
///     .selector(TopNSelector)
///     .build();
/// ```
pub struct PipelineBuilder<
    V = ValidationEngine,
    Seg = PunctuationSegmenter,
    Tab = DocumentTabulator,
    Sc = WeightedScorer,
    Sel = TopNSelector,
> {
    validator: V,
    segmenter: Seg,
    tabulator: Tab,
    scorer: Sc,
    selector: Sel,
}

impl PipelineBuilder {
    /// Start building from the standard stages.
    pub fn new() -> Self {
        PipelineBuilder {
            validator: ValidationEngine::with_defaults(),
            segmenter: PunctuationSegmenter,
            tabulator: DocumentTabulator,
            scorer: WeightedScorer,
            selector: TopNSelector,
        }
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, Seg, Tab, Sc, Sel> PipelineBuilder<V, Seg, Tab, Sc, Sel> {
    /// Override the validator stage.
    pub fn validator<T: InputValidator>(self, v: T) -> PipelineBuilder<T, Seg, Tab, Sc, Sel> {
        PipelineBuilder {
            validator: v,
            segmenter: self.segmenter,
            tabulator: self.tabulator,
            scorer: self.scorer,
            selector: self.selector,
        }
    }

    /// Override the segmenter stage.
    pub fn segmenter<T: Segmenter>(self, s: T) -> PipelineBuilder<V, T, Tab, Sc, Sel> {
        PipelineBuilder {
            validator: self.validator,
            segmenter: s,
            tabulator: self.tabulator,
            scorer: self.scorer,
            selector: self.selector,
        }
    }

    /// Override the tabulator stage.
    pub fn tabulator<T: Tabulator>(self, t: T) -> PipelineBuilder<V, Seg, T, Sc, Sel> {
        PipelineBuilder {
            validator: self.validator,
            segmenter: self.segmenter,
            tabulator: t,
            scorer: self.scorer,
            selector: self.selector,
        }
    }

    /// Override the scorer stage.
    pub fn scorer<T: Scorer>(self, s: T) -> PipelineBuilder<V, Seg, Tab, T, Sel> {
        PipelineBuilder {
            validator: self.validator,
            segmenter: self.segmenter,
            tabulator: self.tabulator,
            scorer: s,
            selector: self.selector,
        }
    }

    /// Override the selector stage.
    pub fn selector<T: Selector>(self, s: T) -> PipelineBuilder<V, Seg, Tab, Sc, T> {
        PipelineBuilder {
            validator: self.validator,
            segmenter: self.segmenter,
            tabulator: self.tabulator,
            scorer: self.scorer,
            selector: s,
        }
    }

    /// Consume the builder and produce a [`Pipeline`].
    pub fn build(self) -> Pipeline<V, Seg, Tab, Sc, Sel> {
        Pipeline {
            validator: self.validator,
            segmenter: self.segmenter,
            tabulator: self.tabulator,
            scorer: self.scorer,
            selector: self.selector,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
