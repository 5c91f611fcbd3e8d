use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of cells on the panel (4×4).
pub const CELL_COUNT: usize = 16;

/// A cell of the 4×4 panel packed into a single index `0..16`.
///
/// `col = ix % 4`, `row = ix / 4`. Displayed as column letter + row
/// number, `A1` (top-left) through `D4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Cell(u8);

impl Cell {
    /// Construct from a packed index. Returns `None` for indices >= 16.
    #[inline]
    pub fn new(ix: usize) -> Option<Cell> {
        if ix < CELL_COUNT {
            Some(Cell(ix as u8))
        } else {
            None
        }
    }

    #[inline]
    pub fn from_col_row(col: u8, row: u8) -> Cell {
        debug_assert!(col < 4 && row < 4);
        Cell((col % 4) + 4 * (row % 4))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn col(self) -> u8 {
        self.0 % 4
    }

    #[inline]
    pub fn row(self) -> u8 {
        self.0 / 4
    }

    /// All 16 cells in index order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..CELL_COUNT as u8).map(Cell)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.col()) as char, self.row() + 1)
    }
}

impl TryFrom<u8> for Cell {
    type Error = String;

    fn try_from(ix: u8) -> Result<Cell, String> {
        Cell::new(ix as usize).ok_or_else(|| format!("cell index {ix} out of range 0..16"))
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> u8 {
        cell.0
    }
}
