//! A*: min-priority frontier keyed on `g + h`, same reopening rule as UCS,
//! using the non-admissible ordering-only heuristic from
//! [`crate::heuristic`].

use crate::board::Board;
use crate::config::SolveConfig;
use crate::error::SolverError;
use crate::heuristic::estimate;
use crate::solution::Solution;
use crate::state::State;

use super::frontier::PriorityFrontier;
use super::run;

pub fn run_astar(board: &Board, initial: &State, config: &SolveConfig) -> Result<Solution, SolverError> {
    run(
        board,
        initial,
        "A*",
        PriorityFrontier::default(),
        true,
        |state| estimate(board, state),
        config,
    )
}

pub(super) use run_astar as run;
