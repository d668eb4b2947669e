use std::io;

use thiserror::Error;

/// Fatal conditions while searching or replaying a solution. Running out of
/// expansions is not one of them, see [`crate::Outcome::Exhausted`].
#[derive(Error, Debug)]
pub enum SolveError {
    #[error("position not found: stored board {index} has no blank")]
    PositionNotFound { index: usize },
    #[error("board index {index} is outside the store ({len} entries)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("board {index} names {parent} as its parent, which was not stored before it")]
    BrokenParentChain { index: usize, parent: usize },
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("cannot read puzzle file: {0}")]
    Io(#[from] io::Error),
    #[error("expected 3 rows, found {0}")]
    RowCount(usize),
    #[error("row {row} has {len} cells, expected 3")]
    RowLength { row: usize, len: usize },
    #[error("invalid character {0:?}")]
    InvalidCharacter(char),
    #[error("expected exactly one space, found {count}")]
    BlankCount { count: usize },
    #[error("duplicate tile {tile}")]
    DuplicateTile { tile: char },
}
