//! Winning pattern table for 4x4 tic-tac-toe.
//!
//! Each pattern is a 16-bit mask over the board in row-major order: bit 0
//! is row 0 / column 0 and bit 15 is row 3 / column 3, so row 0 occupies the
//! least-significant nibble. Pattern masks double as the reported win code.

use serde::Serialize;

/// A named set of squares that wins the game when one player holds all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WinningPattern {
    /// Squares that make up the pattern.
    pub bitmask: u16,
    /// Human-readable name of the pattern.
    pub description: &'static str,
}

impl WinningPattern {
    const fn new(bitmask: u16, description: &'static str) -> Self {
        Self {
            bitmask,
            description,
        }
    }

    /// True when `moves` covers every square of the pattern.
    ///
    /// Extra squares in `moves` do not matter.
    pub fn is_satisfied_by(&self, moves: u16) -> bool {
        moves & self.bitmask == self.bitmask
    }
}

/// Sentinel reported when nobody has completed a pattern.
pub const NO_WINNING_PATTERN: WinningPattern = WinningPattern::new(0, "No winner");

/// Every winning pattern, in the order they are checked.
///
/// "All four corners" appears five times; only the first occurrence can ever
/// match, so the repeats never change a result.
pub static WINNING_PATTERNS: [WinningPattern; 24] = [
    WinningPattern::new(0b0000_0000_0000_1111, "Row 0"),
    WinningPattern::new(0b0000_0000_1111_0000, "Row 1"),
    WinningPattern::new(0b0000_1111_0000_0000, "Row 2"),
    WinningPattern::new(0b1111_0000_0000_0000, "Row 3"),
    WinningPattern::new(0b0001_0001_0001_0001, "Column 0"),
    WinningPattern::new(0b0010_0010_0010_0010, "Column 1"),
    WinningPattern::new(0b0100_0100_0100_0100, "Column 2"),
    WinningPattern::new(0b1000_1000_1000_1000, "Column 3"),
    WinningPattern::new(0b1000_0100_0010_0001, "Upper left to lower right diagonal"),
    WinningPattern::new(0b0001_0010_0100_1000, "Upper right to lower left diagonal"),
    WinningPattern::new(0b1001_0000_0000_1001, "All four corners"),
    WinningPattern::new(0b1001_0000_0000_1001, "All four corners"),
    WinningPattern::new(0b1001_0000_0000_1001, "All four corners"),
    WinningPattern::new(0b1001_0000_0000_1001, "All four corners"),
    WinningPattern::new(0b1001_0000_0000_1001, "All four corners"),
    WinningPattern::new(0b0000_0000_0011_0011, "2x2 box in the upper left corner"),
    WinningPattern::new(0b0000_0000_0110_0110, "2x2 box in the top middle"),
    WinningPattern::new(0b0000_0000_1100_1100, "2x2 box in the upper right corner"),
    WinningPattern::new(0b0000_0011_0011_0000, "2x2 box in the middle left"),
    WinningPattern::new(0b0000_0110_0110_0000, "2x2 box in the center"),
    WinningPattern::new(0b0000_1100_1100_0000, "2x2 box in the middle right"),
    WinningPattern::new(0b0011_0011_0000_0000, "2x2 box in the lower left corner"),
    WinningPattern::new(0b0110_0110_0000_0000, "2x2 box in the bottom middle"),
    WinningPattern::new(0b1100_1100_0000_0000, "2x2 box in the lower right corner"),
];

/// Returns the first pattern, in table order, fully covered by `moves`.
pub fn first_match(moves: u16) -> Option<&'static WinningPattern> {
    WINNING_PATTERNS
        .iter()
        .find(|pattern| pattern.is_satisfied_by(moves))
}
