use std::fmt;

use serde::{Deserialize, Serialize};

/// Displayed color of a panel cell.
///
/// `Cleared` marks a cell whose required press has been satisfied; it is
/// not a hue and stays in place until the attempt is fully reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SquareColor {
    Cleared,
    Red,
    Blue,
    Green,
    Yellow,
    Magenta,
}

impl SquareColor {
    /// The 5 usable hues. Each attempt designates one as neutral; the
    /// other four are live.
    pub const HUES: [SquareColor; 5] = [
        SquareColor::Red,
        SquareColor::Blue,
        SquareColor::Green,
        SquareColor::Yellow,
        SquareColor::Magenta,
    ];

    #[inline]
    pub fn is_hue(self) -> bool {
        self != SquareColor::Cleared
    }
}

impl fmt::Display for SquareColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SquareColor::Cleared => "cleared",
            SquareColor::Red => "red",
            SquareColor::Blue => "blue",
            SquareColor::Green => "green",
            SquareColor::Yellow => "yellow",
            SquareColor::Magenta => "magenta",
        };
        f.write_str(name)
    }
}
