//! Board representation and text parsing.

mod error;
mod parse;
mod types;

pub use error::{BoardError, EvaluationError, ParseError};
pub use parse::parse_board;
pub use types::{BOARD_SIZE, Board, BoardCell, CELL_COUNT, GameStatus, Player, Square};
