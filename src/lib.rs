//! Strictly Quad library - 4x4 tic-tac-toe board evaluation
//!
//! Given the text of a 4x4 board, this library decides whether the game is
//! over, who won and with which pattern, and which squares remain open.
//!
//! # Architecture
//!
//! - **Board**: cell types and the text parser
//! - **Rules**: the winning-pattern table and the bitmask evaluator
//! - **Report**: text and JSON rendering of an evaluation
//! - **Config**: TOML report settings
//!
//! # Example
//!
//! ```
//! use strictly_quad::{Player, evaluate};
//!
//! # fn example() -> Result<(), strictly_quad::BoardError> {
//! let evaluation = evaluate(
//!     "X|X|X|X
//!      O| | |O
//!       | | |
//!      O| | |O",
//! )?;
//! assert_eq!(evaluation.check_winner().winner(), Some(Player::X));
//! assert_eq!(evaluation.check_winner().win_code(), 15);
//! assert_eq!(evaluation.remaining_moves().len(), 8);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod config;
mod report;
mod rules;

// Crate-level exports - Board types
pub use board::{
    BOARD_SIZE, Board, BoardCell, BoardError, CELL_COUNT, EvaluationError, GameStatus,
    ParseError, Player, Square, parse_board,
};

// Crate-level exports - Rules
pub use rules::{
    BoardEvaluation, NO_WINNING_PATTERN, WINNING_PATTERNS, WinStatus, WinningPattern, first_match,
};

// Crate-level exports - Reporting
pub use config::{ConfigError, OutputFormat, ReportConfig};
pub use report::{OpenCell, Report};

use tracing::instrument;

/// Parses and evaluates board text in one step.
#[instrument(skip(text))]
pub fn evaluate(text: &str) -> Result<BoardEvaluation, BoardError> {
    let board = parse_board(text)?;
    Ok(BoardEvaluation::new(&board)?)
}
