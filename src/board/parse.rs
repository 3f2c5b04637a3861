//! Text parser for 4x4 boards.
//!
//! The format is four non-blank lines of four `|`-separated fields:
//!
//! ```text
//! X|O| |
//!  |X| |O
//!  | |X|
//! O| | |X
//! ```
//!
//! Fields are case-insensitive and whitespace anywhere on a line is ignored.
//! A byte-order mark counts as whitespace. Blank lines are skipped, so
//! separator lines between rows are tolerated.

use super::error::ParseError;
use super::types::{BOARD_SIZE, Board, Player, Square};
use std::str::FromStr;
use tracing::{debug, instrument};

/// Parses board text into a fully populated [`Board`].
#[instrument(skip(text), fields(len = text.len()))]
pub fn parse_board(text: &str) -> Result<Board, ParseError> {
    let rows: Vec<&str> = text
        .lines()
        .filter(|line| !line.chars().all(is_blank))
        .collect();
    if rows.len() != BOARD_SIZE {
        return Err(ParseError::RowCount { found: rows.len() });
    }

    let mut squares = [[Square::Empty; BOARD_SIZE]; BOARD_SIZE];
    for (row, (line, row_squares)) in rows.into_iter().zip(squares.iter_mut()).enumerate() {
        let normalized: String = line
            .chars()
            .filter(|c| !is_blank(*c))
            .collect::<String>()
            .to_uppercase();
        let fields: Vec<&str> = normalized.split('|').collect();
        if fields.len() != BOARD_SIZE {
            return Err(ParseError::ColumnCount {
                row,
                found: fields.len(),
            });
        }

        for (column, (token, slot)) in fields.into_iter().zip(row_squares.iter_mut()).enumerate() {
            *slot = parse_square(token).ok_or_else(|| ParseError::InvalidToken {
                row,
                column,
                token: token.to_string(),
            })?;
        }
    }

    let board = Board::from_rows(squares);
    debug!(%board, "Parsed board");
    Ok(board)
}

fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

fn parse_square(token: &str) -> Option<Square> {
    match token {
        "" => Some(Square::Empty),
        "X" => Some(Square::Occupied(Player::X)),
        "O" => Some(Square::Occupied(Player::O)),
        _ => None,
    }
}

impl FromStr for Board {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_board(s)
    }
}
