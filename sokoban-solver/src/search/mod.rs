//! The four search engines (BFS, DFS, UCS, A*) and the single generic frame
//! they all run through, parameterized by a [`Frontier`] discipline.

mod astar;
mod bfs;
mod dfs;
mod frontier;
mod ucs;

use std::collections::HashMap;
use std::time::Instant;

use log::{debug, info, trace};

use crate::action::Action;
use crate::board::Board;
use crate::config::SolveConfig;
use crate::error::{PartialStats, SolverError};
use crate::memory::MemorySampler;
use crate::solution::{replay_cost_trace, Solution};
use crate::state::State;
use crate::successor::successors;

use frontier::{Frontier, Pending};

/// Which of the four graph-search strategies to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Breadth-first search: optimal in action count, frontier is FIFO.
    Bfs,
    /// Depth-first search: no optimality guarantee, frontier is LIFO.
    Dfs,
    /// Uniform-cost search: optimal in total cost, frontier keyed on `g`.
    Ucs,
    /// A*: optimal in total cost (on this corpus), frontier keyed on `g + h`.
    AStar,
}

impl Algorithm {
    /// The name recorded in [`Solution::algorithm_name`] and the 3-line record format.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Ucs => "UCS",
            Algorithm::AStar => "A*",
        }
    }
}

/// Parses the puzzle at `path` and solves it with `algorithm`, using
/// default [`SolveConfig`] (no node cap, no cancellation).
pub fn solve(path: impl AsRef<std::path::Path>, algorithm: Algorithm) -> Result<Solution, SolverError> {
    solve_with_config(path, algorithm, &SolveConfig::default())
}

/// Same as [`solve`], but with an explicit [`SolveConfig`].
pub fn solve_with_config(
    path: impl AsRef<std::path::Path>,
    algorithm: Algorithm,
    config: &SolveConfig,
) -> Result<Solution, SolverError> {
    let (board, initial) = crate::loader::load(path)?;
    solve_state_with_config(&board, &initial, algorithm, config)
}

/// Solves an already-loaded (board, initial state) pair. Split out from
/// [`solve_with_config`] so tests and other in-process callers can skip the
/// filesystem entirely.
pub fn solve_state_with_config(
    board: &Board,
    initial: &State,
    algorithm: Algorithm,
    config: &SolveConfig,
) -> Result<Solution, SolverError> {
    match algorithm {
        Algorithm::Bfs => bfs::run(board, initial, config),
        Algorithm::Dfs => dfs::run(board, initial, config),
        Algorithm::Ucs => ucs::run(board, initial, config),
        Algorithm::AStar => astar::run(board, initial, config),
    }
}

/// The shared search frame every engine runs through. `reopen` distinguishes
/// UCS/A*'s "a strictly cheaper path reopens a visited state" rule from
/// BFS/DFS's simpler "first seen wins" rule; `heuristic` is `|_| 0` for
/// every engine but A*.
pub(super) fn run<F: Frontier>(
    board: &Board,
    initial: &State,
    algorithm_name: &'static str,
    mut frontier: F,
    reopen: bool,
    heuristic: impl Fn(&State) -> u32,
    config: &SolveConfig,
) -> Result<Solution, SolverError> {
    let start = Instant::now();
    let mut memory = MemorySampler::start();

    info!("{algorithm_name}: starting search from {:?}", initial.agent());

    let mut best_cost: HashMap<State, u32> = HashMap::new();
    let mut parent: HashMap<State, (State, Action)> = HashMap::new();
    let mut sequence: u64 = 0;
    let mut nodes_expanded: usize = 0;

    best_cost.insert(initial.clone(), 0);
    frontier.push(
        Pending {
            state: initial.clone(),
            layout: board.initial_stones().to_vec(),
            g: 0,
            sequence,
        },
        heuristic(initial),
    );

    let stats = |nodes_expanded: usize, memory: &mut MemorySampler| {
        memory.sample();
        PartialStats {
            nodes_expanded,
            elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
            peak_memory_mb: memory.peak_mb(),
        }
    };

    while let Some(Pending { state, layout, g, .. }) = frontier.pop() {
        if let Some(token) = &config.cancellation {
            if token.is_cancelled() {
                info!("{algorithm_name}: cancelled after {nodes_expanded} node(s)");
                return Err(SolverError::Cancelled {
                    stats: stats(nodes_expanded, &mut memory),
                });
            }
        }

        nodes_expanded += 1;
        trace!("{algorithm_name}: pop #{nodes_expanded} g={g} agent={:?}", state.agent());

        if let Some(max_nodes) = config.max_nodes {
            if nodes_expanded > max_nodes {
                info!("{algorithm_name}: exhausted node budget of {max_nodes}");
                return Err(SolverError::SearchExhausted {
                    stats: stats(nodes_expanded, &mut memory),
                });
            }
        }

        if state.is_goal(board) {
            let action_sequence = reconstruct(&state, initial, &parent);
            let cost_steps = replay_cost_trace(board, initial, &action_sequence);
            let total_cost = cost_steps.last().copied().unwrap_or(0);
            let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
            memory.sample();

            info!(
                "{algorithm_name}: solved in {nodes_expanded} node(s), {} step(s), cost {total_cost}",
                action_sequence.len()
            );

            return Ok(Solution {
                algorithm_name,
                steps: action_sequence.len(),
                total_cost,
                cost_steps,
                action_sequence,
                nodes_expanded,
                elapsed_ms,
                peak_memory_mb: memory.peak_mb(),
            });
        }

        for succ in successors(board, state.agent(), &layout) {
            let new_g = g + succ.cost;

            let improves = match best_cost.get(&succ.state) {
                None => true,
                Some(&existing) => reopen && new_g < existing,
            };

            if !improves {
                continue;
            }

            best_cost.insert(succ.state.clone(), new_g);
            parent.insert(succ.state.clone(), (state.clone(), succ.action));

            sequence += 1;
            let priority = new_g + heuristic(&succ.state);
            frontier.push(
                Pending {
                    state: succ.state,
                    layout: succ.layout,
                    g: new_g,
                    sequence,
                },
                priority,
            );
        }
    }

    debug!("{algorithm_name}: frontier exhausted with no solution after {nodes_expanded} node(s)");
    Err(SolverError::NoSolution {
        stats: stats(nodes_expanded, &mut memory),
    })
}

/// Walks the parent chain from `goal` back to `initial`, collecting action
/// labels, then reverses them into forward order.
fn reconstruct(goal: &State, initial: &State, parent: &HashMap<State, (State, Action)>) -> String {
    let mut labels = Vec::new();
    let mut current = goal;

    while current != initial {
        let (prev, action) = parent
            .get(current)
            .expect("every non-initial visited state has a parent link");
        labels.push(action.label());
        current = prev;
    }

    labels.iter().rev().collect()
}
