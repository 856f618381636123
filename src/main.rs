mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::{Path, PathBuf};

use clap::{ArgAction, Args, Parser, Subcommand};
use thiserror::Error;

use crate::input::classifier::load_classifier_output;
use crate::input::{InputError, load_session};
use crate::model::params::{AlleviateThreshold, SCORES_PER_POINT, SuggestionParams};
use crate::model::scores::ScoreTable;
use crate::pipeline::alleviate::apply_alleviate;
use crate::pipeline::combine::SuggestError;
use crate::pipeline::complete::complete_label;
use crate::pipeline::suggest_for_selection;
use crate::pipeline::top_scores::build_stored_session;
use crate::report::json::render_json;
use crate::report::text::{
    render_alleviate_text, render_completions_text, render_stored_session_text,
    render_suggestions_text,
};
use crate::report::{ReportFormat, emit};

#[derive(Debug, Parser)]
#[command(
    name = "point-suggest",
    version,
    about = "Rank label suggestions for annotation points from machine classifier scores."
)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Combined suggestions for a set of points that share one label.
    Suggest(SuggestArgs),
    /// Label codes starting with a typed term.
    Complete(CompleteArgs),
    /// Auto-accept decisions for a source confidence threshold.
    Alleviate(AlleviateArgs),
    /// Reduce raw classifier probabilities to the stored top scores per point.
    TopScores(TopScoresArgs),
}

#[derive(Debug, Args)]
struct OutputArgs {
    #[arg(long, value_enum, default_value_t = ReportFormat::Json)]
    format: ReportFormat,
    /// Write to this file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct SuggestArgs {
    /// Session JSON (optionally .gz).
    #[arg(long)]
    session: PathBuf,
    /// Comma-separated point numbers; omit for an empty selection.
    #[arg(long, value_delimiter = ',', num_args = 0..)]
    points: Vec<u32>,
    #[arg(long)]
    top_n: Option<usize>,
    /// Evidence weight for labels outside a point's top scores.
    #[arg(long, value_parser = parse_absent_weight)]
    absent_weight: Option<f64>,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Debug, Args)]
struct CompleteArgs {
    #[arg(long)]
    session: PathBuf,
    #[arg(long, default_value = "")]
    term: String,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Debug, Args)]
struct AlleviateArgs {
    #[arg(long)]
    session: PathBuf,
    /// Confidence threshold in percent; above 99 disables auto-accept.
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    threshold: u8,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Debug, Args)]
struct TopScoresArgs {
    /// Classifier output JSON (optionally .gz).
    #[arg(long)]
    input: PathBuf,
    #[arg(long, default_value_t = SCORES_PER_POINT)]
    top_n: usize,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Suggest(#[from] SuggestError),
    #[error("failed to render output: {0}")]
    Render(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = run(cli.command) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), AppError> {
    match command {
        Command::Suggest(args) => run_suggest(&args),
        Command::Complete(args) => run_complete(&args),
        Command::Alleviate(args) => run_alleviate(&args),
        Command::TopScores(args) => run_top_scores(&args),
    }
}

fn run_suggest(args: &SuggestArgs) -> Result<(), AppError> {
    let session = load_session(&args.session)?;
    let params = resolve_params(args.top_n, args.absent_weight);
    if params.absent_label_weight != SuggestionParams::default_v1().absent_label_weight {
        crate::warn!(
            "absent-label evidence weight overridden to {}; percentages are no longer calibrated against alleviate thresholds",
            params.absent_label_weight
        );
    }
    let suggestions = suggest_for_selection(&session, &args.points, &params)?;
    let body = match args.output.format {
        ReportFormat::Json => render_json(&suggestions)?,
        ReportFormat::Text => render_suggestions_text(&suggestions),
    };
    write_output(&body, args.output.out.as_deref())
}

fn run_complete(args: &CompleteArgs) -> Result<(), AppError> {
    let session = load_session(&args.session)?;
    let codes = complete_label(&session.vocabulary, &args.term);
    let body = match args.output.format {
        ReportFormat::Json => render_json(&codes)?,
        ReportFormat::Text => render_completions_text(&codes),
    };
    write_output(&body, args.output.out.as_deref())
}

fn run_alleviate(args: &AlleviateArgs) -> Result<(), AppError> {
    let session = load_session(&args.session)?;
    let table = session.scores.unwrap_or_else(|| {
        crate::warn!(
            "{} has no machine suggestions; nothing to alleviate",
            session.path.display()
        );
        ScoreTable::new()
    });
    let report = apply_alleviate(&table, AlleviateThreshold(args.threshold));
    crate::info!(
        "alleviate accepted {}/{} point(s)",
        report.accepted,
        report.total
    );
    let body = match args.output.format {
        ReportFormat::Json => render_json(&report)?,
        ReportFormat::Text => render_alleviate_text(&report),
    };
    write_output(&body, args.output.out.as_deref())
}

fn run_top_scores(args: &TopScoresArgs) -> Result<(), AppError> {
    let output = load_classifier_output(&args.input)?;
    let stored = build_stored_session(&output, args.top_n);
    let body = match args.output.format {
        ReportFormat::Json => render_json(&stored)?,
        ReportFormat::Text => render_stored_session_text(&stored),
    };
    write_output(&body, args.output.out.as_deref())
}

fn resolve_params(top_n: Option<usize>, absent_weight: Option<f64>) -> SuggestionParams {
    let mut params = SuggestionParams::default_v1();
    if let Some(n) = top_n {
        params.top_n = n;
    }
    if let Some(w) = absent_weight {
        params.absent_label_weight = w;
    }
    params
}

fn parse_absent_weight(raw: &str) -> Result<f64, String> {
    let w = raw
        .parse::<f64>()
        .map_err(|_| format!("invalid number: {raw}"))?;
    if !w.is_finite() || w <= 0.0 {
        return Err(format!("must be a finite number greater than 0, got {raw}"));
    }
    Ok(w)
}

fn write_output(body: &str, out: Option<&Path>) -> Result<(), AppError> {
    emit(body, out)?;
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
