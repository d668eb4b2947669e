use crate::{
    board::generate_children, reconstruct, Board, SearchStore, Solution, SolveError, VisitedCheck,
};

/// More boards than this and the puzzle is reported as having no solution.
/// Unsolvable boards reach 181,440 positions, so this only bounds memory;
/// it does not guarantee every solvable board fits under it.
pub const MAX_EXPANSIONS: usize = 100_000;

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct SolverConfig {
    pub limit: usize,
    pub visited: VisitedCheck,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            limit: MAX_EXPANSIONS,
            visited: VisitedCheck::Linear,
        }
    }
}

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum SolverState {
    Searching,
    /// The goal board is stored at this index.
    Solved(usize),
    Exhausted,
}

/// Breadth-first search over the store. Entries are expanded in the order
/// they were appended, so the store itself is the queue.
#[derive(Clone, Debug)]
pub struct Solver {
    store: SearchStore,
    cursor: usize,
    expansions: usize,
    limit: usize,
    state: SolverState,
}

impl Solver {
    pub fn new(root: Board, config: SolverConfig) -> Solver {
        Solver {
            store: SearchStore::with_root(root, config.visited),
            cursor: 0,
            expansions: 1,
            limit: config.limit,
            state: if root.is_goal() {
                SolverState::Solved(0)
            } else {
                SolverState::Searching
            },
        }
    }

    pub fn state(&self) -> SolverState {
        self.state
    }

    pub fn store(&self) -> &SearchStore {
        &self.store
    }

    /// (boards generated, boards expanded)
    pub fn statistics(&self) -> (usize, usize) {
        (self.expansions, self.cursor)
    }

    /// Expands the board under the cursor.
    pub fn step(&mut self) -> Result<SolverState, SolveError> {
        if self.state != SolverState::Searching {
            return Ok(self.state);
        }

        // every reachable board was expanded without meeting the goal
        if self.cursor >= self.store.len() {
            self.state = SolverState::Exhausted;
            return Ok(self.state);
        }

        let board = self.store.get(self.cursor)?.board;
        let blank = board.blank().ok_or(SolveError::PositionNotFound {
            index: self.cursor,
        })?;

        for child in generate_children(&board, blank) {
            if self.store.contains(&child) {
                continue;
            }

            let index = self.store.append(child, Some(self.cursor))?;
            self.expansions += 1;

            if child.is_goal() {
                self.state = SolverState::Solved(index);
                return Ok(self.state);
            }
        }

        self.cursor += 1;

        if self.expansions > self.limit {
            self.state = SolverState::Exhausted;
        }

        Ok(self.state)
    }

    pub fn run(&mut self) -> Result<SolverState, SolveError> {
        while self.step()? == SolverState::Searching {}
        Ok(self.state)
    }

    /// Finishes the search if it is still running and reads back the result.
    pub fn into_outcome(mut self) -> Result<Outcome, SolveError> {
        let state = self.run()?;
        let (expansions, expanded) = self.statistics();
        Ok(match state {
            SolverState::Solved(goal) => Outcome::Solved {
                solution: reconstruct(&self.store, goal)?,
                expansions,
                expanded,
            },
            SolverState::Exhausted => Outcome::Exhausted { expansions },
            SolverState::Searching => unreachable!("run only returns once the search has ended"),
        })
    }
}

#[derive(Clone, Debug)]
pub enum Outcome {
    Solved {
        solution: Solution,
        expansions: usize,
        expanded: usize,
    },
    Exhausted {
        expansions: usize,
    },
}

impl Outcome {
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Outcome::Solved { solution, .. } => Some(solution),
            Outcome::Exhausted { .. } => None,
        }
    }

    /// Boards to play back, root first. Empty when there is no solution.
    #[auto_enums::auto_enum(Iterator)]
    pub fn frames(&self) -> impl Iterator<Item = &Board> {
        match self {
            Outcome::Solved { solution, .. } => solution.boards.iter(),
            Outcome::Exhausted { .. } => std::iter::empty(),
        }
    }
}

pub fn solve(root: Board, config: SolverConfig) -> Result<Outcome, SolveError> {
    let mut solver = Solver::new(root, config);
    solver.run()?;
    solver.into_outcome()
}
