//! Strictly Quad - Unified CLI
//!
//! Reads a 4x4 board from disk and reports whether the game is over.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::{Path, PathBuf};
use strictly_quad::{
    BoardEvaluation, OutputFormat, Report, ReportConfig, WINNING_PATTERNS, parse_board,
};
use tracing::{debug, info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Evaluate {
            path,
            format,
            config,
        } => run_evaluate(&path, format, config),
        Command::Patterns => run_patterns(),
    }
}

/// Evaluate a board file and print the report
#[instrument(skip_all, fields(path = %path.display()))]
fn run_evaluate(path: &Path, format: Option<OutputFormat>, config: Option<PathBuf>) -> Result<()> {
    let config = load_report_config(config.as_deref(), format)?;

    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    debug!(path = %absolute.display(), "Reading game file");
    let text = std::fs::read_to_string(&absolute)
        .with_context(|| format!("Error reading game file {}", absolute.display()))?;

    let board = parse_board(&text).context("Error processing game board")?;
    let evaluation = BoardEvaluation::new(&board).context("Error processing game board")?;
    info!(status = ?evaluation.status(), "Board evaluated");

    let report = Report::from_evaluation(&evaluation);
    println!("{}", report.render(&config)?);

    Ok(())
}

/// Print the winning-pattern table
fn run_patterns() -> Result<()> {
    for (index, pattern) in WINNING_PATTERNS.iter().enumerate() {
        println!(
            "{:>2}  {:#06x}  {:>5}  {}",
            index, pattern.bitmask, pattern.bitmask, pattern.description
        );
    }
    Ok(())
}

#[instrument]
fn load_report_config(path: Option<&Path>, format: Option<OutputFormat>) -> Result<ReportConfig> {
    let config = match path {
        Some(path) => ReportConfig::from_file(path)?,
        None => ReportConfig::default(),
    };

    Ok(match format {
        Some(format) => {
            debug!(%format, "Overriding output format");
            config.with_format(format)
        }
        None => config,
    })
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
