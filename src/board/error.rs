//! Board error types.

use derive_more::{Display, Error, From};

/// Error produced while parsing board text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseError {
    /// The text does not contain exactly four non-blank rows.
    #[display("Board contains an invalid number of rows: {found} != 4")]
    RowCount {
        /// Number of non-blank rows found.
        found: usize,
    },

    /// A row does not split into exactly four fields.
    #[display("Row {row} contains an invalid number of columns: {found} != 4")]
    ColumnCount {
        /// Zero-based row index.
        row: usize,
        /// Number of fields found.
        found: usize,
    },

    /// A field is not empty, `X`, or `O`.
    #[display("Invalid move at row {row}, column {column}: {token}")]
    InvalidToken {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        column: usize,
        /// The offending token, after whitespace removal and upper-casing.
        token: String,
    },
}

/// Error produced while evaluating a board.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EvaluationError {
    /// Both players hold a complete winning pattern.
    #[display(
        "The board contains winning moves for both players: Player X = \"{x_description}\" and Player O = \"{o_description}\""
    )]
    ContradictoryBoard {
        /// Pattern completed by X.
        x_description: &'static str,
        /// Pattern completed by O.
        o_description: &'static str,
    },

    /// A cell holds a value outside the defined set of states.
    #[display("Unknown Player value at row {row}, column {column}: {value}")]
    InvariantViolation {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        column: usize,
        /// The raw cell value.
        value: u8,
    },
}

/// Any failure of the parse-then-evaluate pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum BoardError {
    /// Parsing failed.
    #[display("{_0}")]
    Parse(#[error(source)] ParseError),
    /// Evaluation failed.
    #[display("{_0}")]
    Evaluation(#[error(source)] EvaluationError),
}
