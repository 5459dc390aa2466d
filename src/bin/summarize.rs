use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rapid_summarizer::pipeline::{PipelineObserver, StageReport, StageTimingObserver};
use rapid_summarizer::{
    LengthPolicy, SummarizeError, Summarizer, SummarizerConfig, Summary, WordFrequencyTable,
};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const TOP_TERMS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "summarize")]
#[command(about = "Extract the most important sentences from a block of text")]
struct Args {
    /// Input file (reads stdin when omitted or "-")
    input: Option<PathBuf>,

    /// Summary length: brief, medium or detailed (defaults to the config's)
    #[arg(short, long)]
    length: Option<LengthPolicy>,

    /// JSON file with summarizer settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print stage timings and the most frequent terms to stderr
    #[arg(long)]
    stats: bool,
}

/// Collects stage timings plus the top of the frequency table.
#[derive(Debug, Default)]
struct StatsObserver {
    timings: StageTimingObserver,
    top_terms: Vec<(String, usize)>,
}

impl PipelineObserver for StatsObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.timings.on_stage_end(stage, report);
    }

    fn on_frequencies(&mut self, table: &WordFrequencyTable) {
        self.top_terms = table
            .top_terms(TOP_TERMS)
            .into_iter()
            .map(|(term, count)| (term.to_string(), count))
            .collect();
    }

    fn on_failure(&mut self, stage: &'static str, error: &SummarizeError) {
        self.timings.on_failure(stage, error);
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ExitCode> {
    let config = match &args.config {
        Some(path) => SummarizerConfig::load(path)?,
        None => SummarizerConfig::default(),
    };
    let length = args.length.unwrap_or(config.length);
    let summarizer = Summarizer::with_config(config)?;
    let text = read_input(args.input.as_ref())?;

    let mut observer = StatsObserver::default();
    let outcome = summarizer.summarize_observed(&text, length, &mut observer);

    if args.stats {
        print_stats(&observer, outcome.as_ref().ok());
    }

    match outcome {
        Ok(summary) => {
            match args.format {
                OutputFormat::Text => println!("{}", summary.text),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            tracing::debug!(
                code = err.code().as_str(),
                error = %err,
                "summarization failed"
            );
            match args.format {
                OutputFormat::Text => eprintln!("{}", err.user_message()),
                OutputFormat::Json => {
                    let body = json!({
                        "error": {
                            "code": err.code(),
                            "message": err.user_message(),
                        }
                    });
                    println!("{}", serde_json::to_string_pretty(&body)?);
                }
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn print_stats(observer: &StatsObserver, summary: Option<&Summary>) {
    if let Some(summary) = summary {
        eprintln!(
            "words: {}  sentences: {}/{}  kept: {:.0}%",
            summary.word_count,
            summary.selected_count(),
            summary.total_sentences,
            summary.compression_ratio() * 100.0
        );
    }
    if let Some(stage) = observer.timings.failed_stage() {
        eprintln!("failed in stage: {stage}");
    }
    for (stage, report) in observer.timings.reports() {
        match report.items() {
            Some(items) => eprintln!("{stage:>9}: {:.3?} ({items} items)", report.elapsed()),
            None => eprintln!("{stage:>9}: {:.3?}", report.elapsed()),
        }
    }
    if !observer.top_terms.is_empty() {
        let terms: Vec<String> = observer
            .top_terms
            .iter()
            .map(|(term, count)| format!("{term}={count}"))
            .collect();
        eprintln!("top terms: {}", terms.join(", "));
    }
}
