use std::{fs, path::Path, str::FromStr};

use itertools::Itertools;

use crate::{
    board::{SIZE, SPACE},
    Board, ParseError,
};

/// Parses three lines of three cells each. Cells are the tiles `1`-`8` and a
/// single space for the blank, for example:
///
/// ```text
/// 123
/// 4 6
/// 758
/// ```
pub fn parse_board(b: &str) -> Result<Board, ParseError> {
    let mut lines = b
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect_vec();
    while lines.last().map_or(false, |l| l.is_empty()) {
        lines.pop();
    }

    if lines.len() != SIZE {
        return Err(ParseError::RowCount(lines.len()));
    }

    let mut rows = [[SPACE; SIZE]; SIZE];
    for (row, (cells, line)) in rows.iter_mut().zip(&lines).enumerate() {
        let chars = line.chars().collect_vec();
        if chars.len() != SIZE {
            return Err(ParseError::RowLength {
                row: row + 1,
                len: chars.len(),
            });
        }

        for (cell, c) in cells.iter_mut().zip(chars) {
            if c != ' ' && !('1'..='8').contains(&c) {
                return Err(ParseError::InvalidCharacter(c));
            }
            *cell = c as u8;
        }
    }

    let board = Board::new(rows);

    let count = board.cells().iter().filter(|&&c| c == SPACE).count();
    if count != 1 {
        return Err(ParseError::BlankCount { count });
    }

    if let Some(tile) = board.cells().iter().duplicates().next() {
        return Err(ParseError::DuplicateTile {
            tile: *tile as char,
        });
    }

    Ok(board)
}

pub fn load_board(path: impl AsRef<Path>) -> Result<Board, ParseError> {
    parse_board(&fs::read_to_string(path)?)
}

impl FromStr for Board {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_board(s)
    }
}
