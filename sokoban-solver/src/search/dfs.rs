//! Depth-first search: LIFO frontier, no reopening, no heuristic.

use crate::board::Board;
use crate::config::SolveConfig;
use crate::error::SolverError;
use crate::solution::Solution;
use crate::state::State;

use super::frontier::LifoFrontier;
use super::run;

pub fn run_dfs(board: &Board, initial: &State, config: &SolveConfig) -> Result<Solution, SolverError> {
    run(board, initial, "DFS", LifoFrontier::default(), false, |_| 0, config)
}

pub(super) use run_dfs as run;
