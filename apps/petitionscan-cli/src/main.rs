//! petitionscan CLI
//!
//! Serving shim around the risk engine: reads a petition document that an
//! upstream extraction step already reduced to plain text, runs the
//! analysis pipeline, and prints the JSON risk report to stdout.
//!
//! PDF/DOCX extraction, HTTP transport, and report rendering live outside
//! this workspace, so the CLI accepts `.txt` input only. Logs go to
//! stderr to keep stdout parseable.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use clap::Parser;
use tracing::{debug, info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use risk_engine::{build_report, RiskEngine, DEFAULT_REPETITION_THRESHOLD};


/// Command-line arguments for petitionscan
#[derive(Parser, Debug)]
#[command(name = "petitionscan")]
#[command(about = "EB-1A petition RFE risk analyzer")]
struct Args {
    /// Petition text file (.txt, already extracted from its container)
    input: std::path::PathBuf,

    /// Letter similarity threshold above which a pair is flagged
    #[arg(long, default_value_t = DEFAULT_REPETITION_THRESHOLD)]
    threshold: f64,

    /// Emit the raw analysis result instead of the assembled risk report
    #[arg(long)]
    raw: bool,

    /// Single-line JSON output
    #[arg(long)]
    compact: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let json = run(&args)?;
    println!("{}", json);
    Ok(())
}

/// Load the input, run the pipeline, and serialize the selected output
fn run(args: &Args) -> anyhow::Result<String> {
    let text = load_document(&args.input)?;
    info!(
        path = %args.input.display(),
        bytes = text.len(),
        "analyzing petition text"
    );

    let engine = RiskEngine::new().with_threshold(args.threshold);
    let result = engine
        .analyze(&text)
        .with_context(|| format!("analysis of {} failed", args.input.display()))?;
    debug!(
        findings = result.findings.len(),
        repetition_flags = result.repetition_flags.len(),
        "analysis complete"
    );

    if args.raw {
        serialize(&result, args.compact)
    } else {
        serialize(&build_report(&result), args.compact)
    }
}

fn serialize<T: serde::Serialize>(value: &T, compact: bool) -> anyhow::Result<String> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(json)
}

/// Read already-extracted petition text. Container formats are the
/// upstream extractor's job, so anything but `.txt` is rejected here.
fn load_document(path: &Path) -> anyhow::Result<String> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("txt") => {}
        other => bail!(
            "unsupported file format '{}': expected already-extracted .txt input",
            other.unwrap_or("(none)"),
        ),
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
