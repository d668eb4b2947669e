//! Breadth-first solver for the 8-tile sliding puzzle.
//!
//! Every generated board goes into an append-only [`SearchStore`] together
//! with the index of the board it came from. The store is expanded in order,
//! so it is both the queue and the visited set, and a solution is read back
//! by following parent indices from the goal to the root.

mod board;
mod error;
mod loader;
mod path;
mod solver;
mod store;

pub use board::{generate_children, Board, Direction, SIZE, SPACE};
pub use error::{ParseError, SolveError};
pub use loader::{load_board, parse_board};
pub use path::{reconstruct, Solution};
pub use solver::{solve, Outcome, Solver, SolverConfig, SolverState, MAX_EXPANSIONS};
pub use store::{Entry, SearchStore, VisitedCheck};
