use itertools::Itertools;

use crate::{Board, Direction, SearchStore, SolveError};

/// The boards from the initial position to the goal, in playback order.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Solution {
    pub boards: Vec<Board>,
    pub move_count: usize,
}

impl Solution {
    /// The slide that produced each board after the first.
    pub fn directions(&self) -> Vec<Direction> {
        self.boards
            .iter()
            .filter_map(Board::blank)
            .tuple_windows()
            .filter_map(|(from, to)| Direction::between(from, to))
            .collect()
    }
}

/// Follows parent indices from `goal` back to the root and returns the path
/// root first.
pub fn reconstruct(store: &SearchStore, goal: usize) -> Result<Solution, SolveError> {
    let mut indices = vec![goal];
    let mut index = goal;

    while let Some(parent) = store.get(index)?.parent {
        // the store only accepts parents stored before their children
        if parent >= index {
            return Err(SolveError::BrokenParentChain { index, parent });
        }
        indices.push(parent);
        index = parent;
    }

    let boards = indices
        .into_iter()
        .rev()
        .map(|ix| store.get(ix).map(|e| e.board))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Solution {
        move_count: boards.len() - 1,
        boards,
    })
}
