use std::{
    fmt::{Display, Write},
    ops::Index,
};

use itertools::Itertools;
use smallvec::SmallVec;

pub const SIZE: usize = 3;
pub const SPACE: u8 = b' ';

const GOAL: [u8; SIZE * SIZE] = *b"12345678 ";

/// One 3x3 arrangement of the tiles `1`-`8` and the blank.
///
/// Boards are plain values: sliding the blank always produces a new board.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct Board {
    grid: [u8; SIZE * SIZE],
}

impl Board {
    /// Builds a board from its rows. No validation happens here; use
    /// [`crate::parse_board`] for untrusted input.
    pub fn new(rows: [[u8; SIZE]; SIZE]) -> Board {
        let mut grid = [SPACE; SIZE * SIZE];
        for (ix, c) in rows.iter().flatten().enumerate() {
            grid[ix] = *c;
        }

        Board { grid }
    }

    pub fn goal() -> Board {
        Board { grid: GOAL }
    }

    pub fn is_goal(&self) -> bool {
        self.grid == GOAL
    }

    /// Row and column of the first blank in row-major order.
    pub fn blank(&self) -> Option<(usize, usize)> {
        self.grid
            .iter()
            .find_position(|&&c| c == SPACE)
            .map(|(ix, _)| (ix / SIZE, ix % SIZE))
    }

    pub fn cells(&self) -> &[u8; SIZE * SIZE] {
        &self.grid
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.grid.chunks(SIZE)
    }

    // an odd number of inversions among the tiles can never be sorted by slides
    pub fn is_solvable(&self) -> bool {
        let tiles = self.grid.iter().filter(|&&c| c != SPACE).collect_vec();
        let inversions = tiles
            .iter()
            .tuple_combinations()
            .filter(|(a, b)| a > b)
            .count();

        inversions % 2 == 0
    }

    fn swapped(&self, a: (usize, usize), b: (usize, usize)) -> Board {
        let mut grid = self.grid;
        grid.swap(a.0 * SIZE + a.1, b.0 * SIZE + b.1);
        Board { grid }
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for line in self.rows() {
            if !first {
                f.write_char('\n')?;
            } else {
                first = false;
            }

            for c in line {
                f.write_char(*c as char)?;
            }
        }

        Ok(())
    }
}

impl Index<(usize, usize)> for Board {
    type Output = u8;
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.grid[index.0 * SIZE + index.1]
    }
}

/// The direction the blank slides in.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum Direction {
    Left,
    Right,
    Down,
    Up,
}

impl Direction {
    /// Tie-break order: siblings are generated and tested in this order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Down,
        Direction::Up,
    ];

    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Up => (-1, 0),
        }
    }

    /// The direction that takes the blank from `from` to the adjacent `to`.
    pub fn between(from: (usize, usize), to: (usize, usize)) -> Option<Direction> {
        let delta = (
            to.0 as isize - from.0 as isize,
            to.1 as isize - from.1 as isize,
        );
        Direction::ALL.into_iter().find(|d| d.offset() == delta)
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Direction::Left => "Left",
            Direction::Right => "Right",
            Direction::Down => "Down",
            Direction::Up => "Up",
        };
        f.write_str(s)
    }
}

fn target(blank: (usize, usize), direction: Direction) -> Option<(usize, usize)> {
    let (di, dj) = direction.offset();
    let i = blank.0.checked_add_signed(di)?;
    let j = blank.1.checked_add_signed(dj)?;
    (i < SIZE && j < SIZE).then_some((i, j))
}

/// Every board reachable from `board` by one slide of the blank at `blank`,
/// in left, right, down, up order. Only the bounds check ever skips a
/// direction.
pub fn generate_children(board: &Board, blank: (usize, usize)) -> SmallVec<[Board; 4]> {
    Direction::ALL
        .into_iter()
        .filter_map(|d| target(blank, d))
        .map(|t| board.swapped(blank, t))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn board(s: &str) -> Board {
        let mut rows = [[SPACE; SIZE]; SIZE];
        for (row, line) in rows.iter_mut().zip(s.split('/')) {
            row.copy_from_slice(line.as_bytes());
        }
        Board::new(rows)
    }

    #[test]
    fn goal_is_goal() {
        assert!(Board::goal().is_goal());
        assert_eq!(board("123/456/78 "), Board::goal());
        assert!(!board("123/456/7 8").is_goal());
    }

    #[test]
    fn blank_is_found_in_row_major_order() {
        assert_eq!(board("123/4 6/785").blank(), Some((1, 1)));
        assert_eq!(Board::goal().blank(), Some((2, 2)));
        assert_eq!(board("123/456/789").blank(), None);
    }

    #[test]
    fn centre_blank_has_four_children_in_tie_break_order() {
        let b = board("123/4 6/785");
        let children = generate_children(&b, (1, 1));

        assert_eq!(
            children.as_slice(),
            &[
                board("123/ 46/785"),
                board("123/46 /785"),
                board("123/486/7 5"),
                board("1 3/426/785"),
            ]
        );
    }

    #[test]
    fn corner_blank_has_two_children() {
        let children = generate_children(&Board::goal(), (2, 2));
        // right and down fall off the board
        assert_eq!(
            children.as_slice(),
            &[board("123/456/7 8"), board("123/45 /786")]
        );

        let children = generate_children(&board(" 23/145/786"), (0, 0));
        assert_eq!(
            children.as_slice(),
            &[board("2 3/145/786"), board("123/ 45/786")]
        );
    }

    #[test]
    fn edge_blank_has_three_children() {
        let children = generate_children(&board("1 3/425/786"), (0, 1));
        assert_eq!(children.len(), 3);
        assert_eq!(children[0], board(" 13/425/786"));
        assert_eq!(children[1], board("13 /425/786"));
        assert_eq!(children[2], board("123/4 5/786"));
    }

    #[test]
    fn children_are_permutations_of_the_parent() {
        let b = board("8 6/547/231");
        let expected = b.cells().iter().sorted().collect_vec();
        for child in generate_children(&b, b.blank().unwrap()) {
            assert_eq!(child.cells().iter().sorted().collect_vec(), expected);
            assert_ne!(child, b);
        }
    }

    #[test]
    fn parity() {
        assert!(Board::goal().is_solvable());
        assert!(board("123/4 6/758").is_solvable());
        assert!(!board("123/4 6/785").is_solvable());
        assert!(!board("213/456/78 ").is_solvable());
        assert!(!board("123/456/87 ").is_solvable());
    }

    #[test]
    fn direction_between_adjacent_cells() {
        assert_eq!(Direction::between((1, 1), (1, 0)), Some(Direction::Left));
        assert_eq!(Direction::between((1, 1), (0, 1)), Some(Direction::Up));
        assert_eq!(Direction::between((1, 1), (2, 2)), None);
    }

    #[test]
    fn display() {
        assert_eq!(board("123/4 6/785").to_string(), "123\n4 6\n785");
    }
}
