//! Win detection for 4x4 tic-tac-toe.
//!
//! A [`BoardEvaluation`] scans a board once, building one move mask per
//! player and the list of open squares, then matches each mask against
//! [`super::WINNING_PATTERNS`]. All results are fixed at construction.

use super::patterns::{NO_WINNING_PATTERN, WinningPattern, first_match};
use crate::board::{Board, BoardCell, EvaluationError, GameStatus, Player, Square};
use serde::Serialize;
use strum::IntoEnumIterator;
use tracing::{debug, instrument, warn};

/// Who won, and with which pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WinStatus {
    winner: Option<Player>,
    win_code: u16,
    win_description: &'static str,
}

impl WinStatus {
    /// Status reported when nobody has completed a pattern.
    pub const NONE: WinStatus = WinStatus {
        winner: None,
        win_code: NO_WINNING_PATTERN.bitmask,
        win_description: NO_WINNING_PATTERN.description,
    };

    fn won(player: Player, pattern: &WinningPattern) -> Self {
        Self {
            winner: Some(player),
            win_code: pattern.bitmask,
            win_description: pattern.description,
        }
    }

    /// The winning player, if any.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Bitmask of the winning pattern, 0 when there is no winner.
    pub fn win_code(&self) -> u16 {
        self.win_code
    }

    /// Name of the winning pattern, "No winner" when there is none.
    pub fn win_description(&self) -> &'static str {
        self.win_description
    }

    /// True when a pattern was completed.
    pub fn has_winner(&self) -> bool {
        self.win_code != NO_WINNING_PATTERN.bitmask
    }
}

impl Default for WinStatus {
    fn default() -> Self {
        Self::NONE
    }
}

/// The evaluated state of a single board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardEvaluation {
    x_moves: u16,
    o_moves: u16,
    win_status: WinStatus,
    remaining_moves: Vec<BoardCell>,
}

impl BoardEvaluation {
    /// Evaluates a board.
    ///
    /// Fails with [`EvaluationError::ContradictoryBoard`] when both players
    /// hold a winning pattern, since no legal game reaches that position.
    #[instrument(skip(board), fields(board = %board))]
    pub fn new(board: &Board) -> Result<Self, EvaluationError> {
        let mut x_moves = 0u16;
        let mut o_moves = 0u16;
        let mut remaining_moves = Vec::new();

        for (cell, square) in board.cells() {
            match square {
                Square::Occupied(Player::X) => x_moves |= cell.bit(),
                Square::Occupied(Player::O) => o_moves |= cell.bit(),
                Square::Empty => remaining_moves.push(cell),
            }
        }
        debug!(x_moves, o_moves, open = remaining_moves.len(), "Scanned board");

        let x_status = player_status(Player::X, x_moves);
        let o_status = player_status(Player::O, o_moves);

        let win_status = match (x_status.has_winner(), o_status.has_winner()) {
            (true, true) => {
                warn!(
                    x = x_status.win_description,
                    o = o_status.win_description,
                    "Both players hold a winning pattern"
                );
                return Err(EvaluationError::ContradictoryBoard {
                    x_description: x_status.win_description,
                    o_description: o_status.win_description,
                });
            }
            (true, false) => x_status,
            (false, _) => o_status,
        };

        debug!(?win_status, "Board evaluated");
        Ok(Self {
            x_moves,
            o_moves,
            win_status,
            remaining_moves,
        })
    }

    /// Returns the win status.
    pub fn check_winner(&self) -> &WinStatus {
        &self.win_status
    }

    /// Returns the open squares in row-major order.
    pub fn remaining_moves(&self) -> &[BoardCell] {
        &self.remaining_moves
    }

    /// True when someone has won or no squares are open.
    pub fn is_game_over(&self) -> bool {
        self.win_status.has_winner() || self.remaining_moves.is_empty()
    }

    /// Bitmask of squares held by `player`.
    pub fn moves(&self, player: Player) -> u16 {
        match player {
            Player::X => self.x_moves,
            Player::O => self.o_moves,
        }
    }

    /// Summarizes the evaluation as a [`GameStatus`].
    pub fn status(&self) -> GameStatus {
        match self.win_status.winner() {
            Some(player) => GameStatus::Won(player),
            None if self.remaining_moves.is_empty() => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// Win status each player would have on their own, ignoring the other.
    pub fn player_statuses(&self) -> impl Iterator<Item = WinStatus> + '_ {
        Player::iter().map(|player| player_status(player, self.moves(player)))
    }
}

fn player_status(player: Player, moves: u16) -> WinStatus {
    match first_match(moves) {
        Some(pattern) => WinStatus::won(player, pattern),
        None => WinStatus::NONE,
    }
}
