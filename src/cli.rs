//! Command-line interface for strictly_quad.

use clap::{Parser, Subcommand};
use strictly_quad::OutputFormat;

/// Strictly Quad - 4x4 tic-tac-toe board evaluator
#[derive(Parser, Debug)]
#[command(name = "strictly_quad")]
#[command(about = "Evaluate the state of a 4x4 tic-tac-toe board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate a board file and report the result
    Evaluate {
        /// Path to the board file
        path: std::path::PathBuf,

        /// Output format (overrides the config file)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Path to a TOML report configuration
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },

    /// List the winning patterns in the order they are checked
    Patterns,
}
