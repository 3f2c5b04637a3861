//! Game rules for 4x4 tic-tac-toe.
//!
//! Rules are pure functions over a [`crate::Board`]: the pattern table and
//! the evaluator that matches player moves against it.

pub mod patterns;
pub mod win;

pub use patterns::{NO_WINNING_PATTERN, WINNING_PATTERNS, WinningPattern, first_match};
pub use win::{BoardEvaluation, WinStatus};
