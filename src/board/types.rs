//! Core domain types for 4x4 tic-tac-toe.

use super::error::EvaluationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

/// Number of rows (and columns) on the board.
pub const BOARD_SIZE: usize = 4;

/// Number of squares on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum Player {
    /// Player X.
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Raw code for an empty square.
    pub const EMPTY_CODE: u8 = 0;
    /// Raw code for a square held by X.
    pub const X_CODE: u8 = 1;
    /// Raw code for a square held by O.
    pub const O_CODE: u8 = 2;

    /// Decodes a raw cell code, `None` for anything outside the defined set.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            Self::EMPTY_CODE => Some(Square::Empty),
            Self::X_CODE => Some(Square::Occupied(Player::X)),
            Self::O_CODE => Some(Square::Occupied(Player::O)),
            _ => None,
        }
    }

    /// Symbol used in the textual board format (empty string for an empty square).
    pub fn symbol(self) -> &'static str {
        match self {
            Square::Empty => "",
            Square::Occupied(Player::X) => "X",
            Square::Occupied(Player::O) => "O",
        }
    }
}

/// A zero-based (row, column) reference to a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct BoardCell {
    row: u8,
    column: u8,
}

impl BoardCell {
    /// All 16 cells in row-major order.
    pub const ALL: [BoardCell; CELL_COUNT] = {
        let mut cells = [BoardCell { row: 0, column: 0 }; CELL_COUNT];
        let mut i = 0;
        while i < CELL_COUNT {
            cells[i] = BoardCell {
                row: (i / BOARD_SIZE) as u8,
                column: (i % BOARD_SIZE) as u8,
            };
            i += 1;
        }
        cells
    };

    /// Creates a cell reference, `None` if either coordinate is off the board.
    pub fn new(row: usize, column: usize) -> Option<Self> {
        if row < BOARD_SIZE && column < BOARD_SIZE {
            Some(Self {
                row: row as u8,
                column: column as u8,
            })
        } else {
            None
        }
    }

    /// Creates a cell reference from a row-major index (0-15).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row (0-3).
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column (0-3).
    pub fn column(self) -> usize {
        self.column as usize
    }

    /// Row-major index (0-15).
    pub fn index(self) -> usize {
        self.row() * BOARD_SIZE + self.column()
    }

    /// Single-bit mask for this cell; bit 0 is the upper-left square.
    pub fn bit(self) -> u16 {
        1 << self.index()
    }
}

impl fmt::Display for BoardCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}, column {}", self.row, self.column)
    }
}

/// 4x4 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares indexed as `squares[row][column]`.
    squares: [[Square; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from fully specified rows.
    pub fn from_rows(squares: [[Square; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { squares }
    }

    /// Creates a board from raw cell codes (0 = empty, 1 = X, 2 = O).
    #[instrument]
    pub fn from_codes(codes: [[u8; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self, EvaluationError> {
        let mut board = Self::new();
        for cell in BoardCell::ALL {
            let value = codes[cell.row()][cell.column()];
            let square = Square::from_code(value).ok_or(EvaluationError::InvariantViolation {
                row: cell.row(),
                column: cell.column(),
                value,
            })?;
            board.set(cell, square);
        }
        Ok(board)
    }

    /// Gets the square at the given cell.
    pub fn get(&self, cell: BoardCell) -> Square {
        self.squares[cell.row()][cell.column()]
    }

    /// Sets the square at the given cell.
    pub fn set(&mut self, cell: BoardCell, square: Square) {
        self.squares[cell.row()][cell.column()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, cell: BoardCell) -> bool {
        self.get(cell) == Square::Empty
    }

    /// Returns all rows.
    pub fn rows(&self) -> &[[Square; BOARD_SIZE]; BOARD_SIZE] {
        &self.squares
    }

    /// Iterates over every cell with its square, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (BoardCell, Square)> + '_ {
        BoardCell::ALL.into_iter().map(|cell| (cell, self.get(cell)))
    }
}

/// Renders the board in the same `X|O| | ` format the parser reads.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.squares.iter().enumerate() {
            let line = row
                .iter()
                .map(|square| match square {
                    Square::Empty => " ",
                    other => other.symbol(),
                })
                .collect::<Vec<_>>()
                .join("|");
            if index + 1 < BOARD_SIZE {
                writeln!(f, "{}", line)?;
            } else {
                write!(f, "{}", line)?;
            }
        }
        Ok(())
    }
}

/// Overall status of an evaluated board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves remain and nobody has won.
    InProgress,
    /// A player completed a winning pattern.
    Won(Player),
    /// The board is full without a winner.
    Draw,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_are_row_major() {
        assert_eq!(BoardCell::ALL[0], BoardCell::new(0, 0).unwrap());
        assert_eq!(BoardCell::ALL[5], BoardCell::new(1, 1).unwrap());
        assert_eq!(BoardCell::ALL[15], BoardCell::new(3, 3).unwrap());
        for (index, cell) in BoardCell::ALL.iter().enumerate() {
            assert_eq!(cell.index(), index);
            assert_eq!(cell.bit(), 1 << index);
        }
    }

    #[test]
    fn test_cell_out_of_bounds() {
        assert_eq!(BoardCell::new(4, 0), None);
        assert_eq!(BoardCell::new(0, 4), None);
        assert_eq!(BoardCell::from_index(16), None);
    }

    #[test]
    fn test_from_codes_rejects_unknown_value() {
        let mut codes = [[0u8; 4]; 4];
        codes[2][1] = 7;
        let err = Board::from_codes(codes).unwrap_err();
        assert_eq!(
            err,
            EvaluationError::InvariantViolation {
                row: 2,
                column: 1,
                value: 7
            }
        );
    }

    #[test]
    fn test_from_codes_maps_players() {
        let codes = [[1, 2, 0, 0], [0; 4], [0; 4], [0, 0, 0, 2]];
        let board = Board::from_codes(codes).unwrap();
        assert_eq!(board.get(BoardCell::new(0, 0).unwrap()), Square::Occupied(Player::X));
        assert_eq!(board.get(BoardCell::new(0, 1).unwrap()), Square::Occupied(Player::O));
        assert_eq!(board.get(BoardCell::new(3, 3).unwrap()), Square::Occupied(Player::O));
        assert!(board.is_empty(BoardCell::new(1, 2).unwrap()));
    }

    #[test]
    fn test_display_format() {
        let mut board = Board::new();
        board.set(BoardCell::new(0, 0).unwrap(), Square::Occupied(Player::X));
        board.set(BoardCell::new(3, 3).unwrap(), Square::Occupied(Player::O));
        assert_eq!(board.to_string(), "X| | | \n | | | \n | | | \n | | |O");
    }
}
