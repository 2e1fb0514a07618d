//! Uniform-cost search: min-priority frontier keyed on `g` alone, reopening
//! a state whenever a strictly cheaper path to it is found.

use crate::board::Board;
use crate::config::SolveConfig;
use crate::error::SolverError;
use crate::solution::Solution;
use crate::state::State;

use super::frontier::PriorityFrontier;
use super::run;

pub fn run_ucs(board: &Board, initial: &State, config: &SolveConfig) -> Result<Solution, SolverError> {
    run(board, initial, "UCS", PriorityFrontier::default(), true, |_| 0, config)
}

pub(super) use run_ucs as run;
