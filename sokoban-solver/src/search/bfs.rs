//! Breadth-first search: FIFO frontier, no reopening, no heuristic.

use crate::board::Board;
use crate::config::SolveConfig;
use crate::error::SolverError;
use crate::solution::Solution;
use crate::state::State;

use super::frontier::FifoFrontier;
use super::run;

pub fn run_bfs(board: &Board, initial: &State, config: &SolveConfig) -> Result<Solution, SolverError> {
    run(board, initial, "BFS", FifoFrontier::default(), false, |_| 0, config)
}

pub(super) use run_bfs as run;
