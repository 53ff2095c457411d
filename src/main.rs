use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use engagement::{from_path, from_text, History, Prediction, Predictor, Region, ScoreResult};

const BAR_WIDTH: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RegionArg {
    /// North America only
    Na,
    /// Europe only
    Eu,
    /// Both regions
    Both,
}

impl RegionArg {
    fn regions(self) -> Vec<Region> {
        match self {
            RegionArg::Na => vec![Region::NorthAmerica],
            RegionArg::Eu => vec![Region::Europe],
            RegionArg::Both => Region::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "engagement",
    about = "Predict engagement for a comment with regional heuristics",
    version
)]
struct Cli {
    /// Comment text (reads stdin if neither text nor files are given)
    text: Vec<String>,

    /// Read a comment from a file (repeatable)
    #[arg(short, long = "file")]
    files: Vec<PathBuf>,

    /// Treat each non-empty stdin line as a separate comment
    #[arg(long, conflicts_with_all = ["text", "files"])]
    lines: bool,

    /// Regional rule set to apply
    #[arg(long, value_enum, env = "ENGAGEMENT_REGION", default_value = "both")]
    region: RegionArg,

    /// Print JSON instead of a report
    #[arg(long)]
    json: bool,

    /// Number of predictions kept in the history table
    #[arg(long, env = "ENGAGEMENT_HISTORY", default_value_t = 20)]
    history: usize,
}

/// How a run ended.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Done,
    EmptyInput,
}

fn print_usage() {
    eprintln!("Usage: engagement <text>");
    eprintln!("   or: echo <text> | engagement");
    eprintln!("   or: engagement --file comment.txt");
    eprintln!("   or: cat comments.txt | engagement --lines");
}

fn progress_bar(fraction: f64) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * BAR_WIDTH as f64).round()) as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

fn render_result(out: &mut impl Write, result: &ScoreResult) -> io::Result<()> {
    writeln!(
        out,
        "{}: {} (score {:.2})",
        result.region.display_name(),
        result.label,
        result.score
    )?;
    writeln!(out, "  {}", progress_bar(result.progress()))?;
    writeln!(out, "  {}", result.explanation())
}

fn render_prediction(out: &mut impl Write, prediction: &Prediction) -> io::Result<()> {
    writeln!(out, "Comment: {}", prediction.text)?;
    writeln!(out, "Features: {}", prediction.features.summary())?;
    for result in &prediction.results {
        render_result(out, result)?;
    }
    Ok(())
}

fn render_history(out: &mut impl Write, history: &History, regions: &[Region]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "History ({} entries)", history.len())?;
    for (i, entry) in history.entries().enumerate() {
        let labels: Vec<String> = regions
            .iter()
            .map(|region| match entry.label(*region) {
                Some(label) => format!("{}={}", region.as_str(), label),
                None => format!("{}=-", region.as_str()),
            })
            .collect();
        writeln!(out, "{:>3}. {} | {}", i + 1, labels.join(" "), entry.text)?;
    }
    Ok(())
}

/// One comment prints as an object, several as an array.
fn render_json(predictions: &[Prediction]) -> serde_json::Result<String> {
    match predictions {
        [single] => serde_json::to_string_pretty(single),
        many => serde_json::to_string_pretty(many),
    }
}

/// Gather comments from arguments, files, or (when neither is given) stdin.
fn collect_comments(cli: &Cli, mut stdin: impl Read) -> Result<Vec<String>, engagement::Error> {
    let mut comments = Vec::new();

    if !cli.text.is_empty() {
        comments.push(from_text(&cli.text.join(" ")));
    }
    for path in &cli.files {
        comments.push(from_path(path)?);
    }

    if comments.is_empty() {
        let mut buffer = String::new();
        stdin.read_to_string(&mut buffer)?;
        if cli.lines {
            comments.extend(buffer.lines().map(from_text).filter(|l| !l.is_empty()));
        } else {
            comments.push(from_text(&buffer));
        }
    }

    Ok(comments)
}

fn run(
    cli: &Cli,
    stdin: impl Read,
    out: &mut impl Write,
) -> Result<Outcome, Box<dyn std::error::Error>> {
    let comments = collect_comments(cli, stdin)?;

    if comments.iter().all(|c| c.is_empty()) {
        return Ok(Outcome::EmptyInput);
    }

    let predictor = Predictor::with_regions(&cli.region.regions());
    let mut history = History::with_capacity(cli.history);
    let mut predictions = Vec::new();

    for comment in &comments {
        if comment.is_empty() {
            warn!("skipping empty comment");
            continue;
        }
        let prediction = predictor.predict(comment)?;
        info!(words = prediction.features.word_count, "predicted comment");
        history.record(&prediction);
        predictions.push(prediction);
    }

    if cli.json {
        writeln!(out, "{}", render_json(&predictions)?)?;
        return Ok(Outcome::Done);
    }

    for (i, prediction) in predictions.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        render_prediction(out, prediction)?;
    }

    if cli.lines {
        render_history(out, &history, predictor.regions())?;
    }

    Ok(Outcome::Done)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();

    if run(&cli, io::stdin().lock(), &mut stdout)? == Outcome::EmptyInput {
        eprintln!("Please write something first.");
        print_usage();
        std::process::exit(1);
    }

    Ok(())
}
