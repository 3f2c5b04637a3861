//! Human- and machine-readable reports of an evaluation.

use crate::board::{BoardCell, Player};
use crate::config::{OutputFormat, ReportConfig};
use crate::rules::BoardEvaluation;
use serde::Serialize;
use std::fmt;
use tracing::instrument;

/// An open square as it appears in a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OpenCell {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub column: usize,
}

impl From<BoardCell> for OpenCell {
    fn from(cell: BoardCell) -> Self {
        Self {
            row: cell.row(),
            column: cell.column(),
        }
    }
}

/// Snapshot of an evaluation, ready to print or serialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Whether the game has ended.
    pub game_over: bool,
    /// The winning player, if any.
    pub winner: Option<Player>,
    /// Bitmask of the winning pattern, 0 when there is no winner.
    pub win_code: u16,
    /// Name of the winning pattern.
    pub win_description: String,
    /// Open squares in row-major order.
    pub remaining_moves: Vec<OpenCell>,
}

impl Report {
    /// Builds a report from an evaluation.
    #[instrument(skip(evaluation))]
    pub fn from_evaluation(evaluation: &BoardEvaluation) -> Self {
        let status = evaluation.check_winner();
        Self {
            game_over: evaluation.is_game_over(),
            winner: status.winner(),
            win_code: status.win_code(),
            win_description: status.win_description().to_string(),
            remaining_moves: evaluation
                .remaining_moves()
                .iter()
                .copied()
                .map(OpenCell::from)
                .collect(),
        }
    }

    /// Renders the report in the configured format.
    #[instrument(skip(self, config), fields(format = %config.format()))]
    pub fn render(&self, config: &ReportConfig) -> Result<String, serde_json::Error> {
        match config.format() {
            OutputFormat::Text => Ok(self.to_string()),
            OutputFormat::Json if *config.pretty() => serde_json::to_string_pretty(self),
            OutputFormat::Json => serde_json::to_string(self),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(player) = self.winner {
            return write!(f, "Game over, player {} wins: {}.", player, self.win_description);
        }
        if self.game_over {
            return write!(f, "Game over, no winner and no moves remaining.");
        }
        write!(f, "No winner, remaining moves:")?;
        for cell in &self.remaining_moves {
            write!(f, "\n  row {}, column {}", cell.row, cell.column)?;
        }
        Ok(())
    }
}
