//! The symmetry group used by the rules: identity, the eight wrapping
//! single-step translations, and the dihedral symmetries of the square.
//!
//! Every instruction is a bijection on the 16 cells, so chain resolution
//! in the engine can iterate `apply` without ever leaving the panel.

use serde::{Deserialize, Serialize};

use crate::grid::Cell;

/// One of the 16 symmetry operations a cell can be bound to.
///
/// Translations wrap modulo 4 in both axes. Mirrors are named by the
/// axis/diagonal they fix (`A1D4` is the main diagonal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Instruction {
    MoveUpLeft,
    MoveUp,
    MoveUpRight,
    MoveRight,
    MoveDownRight,
    MoveDown,
    MoveDownLeft,
    MoveLeft,
    MirrorHorizontally,
    MirrorVertically,
    MirrorDiagonallyA1D4,
    MirrorDiagonallyA4D1,
    Rotate90CW,
    Rotate90CCW,
    Rotate180,
    Stay,
}

impl Instruction {
    /// All 16 instructions, in a fixed order (the order the seeded
    /// shuffle starts from).
    pub const ALL: [Instruction; 16] = [
        Instruction::MoveUpLeft,
        Instruction::MoveUp,
        Instruction::MoveUpRight,
        Instruction::MoveRight,
        Instruction::MoveDownRight,
        Instruction::MoveDown,
        Instruction::MoveDownLeft,
        Instruction::MoveLeft,
        Instruction::MirrorHorizontally,
        Instruction::MirrorVertically,
        Instruction::MirrorDiagonallyA1D4,
        Instruction::MirrorDiagonallyA4D1,
        Instruction::Rotate90CW,
        Instruction::Rotate90CCW,
        Instruction::Rotate180,
        Instruction::Stay,
    ];

    /// Apply this symmetry to a cell.
    ///
    /// "Up" moves toward row 1, so a one-step move up is `row + 3 mod 4`.
    pub fn apply(self, cell: Cell) -> Cell {
        use Instruction::*;

        let (col, row) = (cell.col(), cell.row());
        let (c2, r2) = match self {
            Stay => (col, row),
            MoveUpLeft => (col + 3, row + 3),
            MoveUp => (col, row + 3),
            MoveUpRight => (col + 1, row + 3),
            MoveRight => (col + 1, row),
            MoveDownRight => (col + 1, row + 1),
            MoveDown => (col, row + 1),
            MoveDownLeft => (col + 3, row + 1),
            MoveLeft => (col + 3, row),
            MirrorHorizontally => (3 - col, row),
            MirrorVertically => (col, 3 - row),
            MirrorDiagonallyA1D4 => (row, col),
            MirrorDiagonallyA4D1 => (3 - row, 3 - col),
            Rotate90CW => (3 - row, col),
            Rotate90CCW => (row, 3 - col),
            Rotate180 => (3 - col, 3 - row),
        };
        Cell::from_col_row(c2 % 4, r2 % 4)
    }
}
