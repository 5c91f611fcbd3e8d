//! Remote text-command grammar.
//!
//! A command is either the literal `colorblind` or a sequence of cell
//! tokens (`A1`..`D4`, case-insensitive) separated by spaces, commas, or
//! semicolons. A command with any malformed token is rejected whole; the
//! engine never sees a partial press sequence.

use std::fmt;

use crate::grid::Cell;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A decoded remote command.
pub enum Command {
    /// Press these cells, in order.
    Presses(Vec<Cell>),
    /// Toggle the colorblind rendering mode on.
    Colorblind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Why a command was rejected. No engine state changes on rejection.
pub enum CommandError {
    /// A token was not a valid cell reference.
    BadToken { token: String },
    /// The command contained no tokens at all.
    Empty,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::BadToken { token } => {
                write!(f, "invalid cell token: {token:?} (expected A1..D4)")
            }
            CommandError::Empty => write!(f, "empty command"),
        }
    }
}

impl std::error::Error for CommandError {}

/// Parse a remote command.
pub fn parse(input: &str) -> Result<Command, CommandError> {
    if input.trim().eq_ignore_ascii_case("colorblind") {
        return Ok(Command::Colorblind);
    }

    let mut cells = Vec::new();
    for token in input.split([' ', ',', ';']).filter(|t| !t.is_empty()) {
        match parse_cell(token) {
            Some(cell) => cells.push(cell),
            None => {
                return Err(CommandError::BadToken {
                    token: token.to_string(),
                })
            }
        }
    }

    if cells.is_empty() {
        return Err(CommandError::Empty);
    }
    Ok(Command::Presses(cells))
}

fn parse_cell(token: &str) -> Option<Cell> {
    let bytes = token.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let col = bytes[0].to_ascii_lowercase();
    let row = bytes[1];
    if !(b'a'..=b'd').contains(&col) || !(b'1'..=b'4').contains(&row) {
        return None;
    }
    Some(Cell::from_col_row(col - b'a', row - b'1'))
}
