//! A weighted Sokoban ("push the stone onto the switch") solver.
//!
//! A puzzle is split into a [`Board`] -- the fixed walls, floor, switches,
//! and per-stone weight table -- and a [`State`] -- just the agent's
//! position and every stone's current position, which is all that changes
//! as the agent walks and pushes. Four search engines
//! ([`Algorithm::Bfs`], [`Algorithm::Dfs`], [`Algorithm::Ucs`],
//! [`Algorithm::AStar`]) explore the same state graph through a single
//! shared frame, differing only in which [`State`] their frontier hands
//! back next.
#![warn(missing_docs)]

pub mod action;
pub mod board;
pub mod config;
pub mod deadlock;
pub mod error;
pub mod heuristic;
pub mod loader;
pub mod memory;
mod search;
pub mod solution;
pub mod state;
pub mod successor;

pub use action::Action;
pub use board::{Board, Direction, Pos, Terrain};
pub use config::{CancellationToken, SolveConfig};
pub use error::{PartialStats, SolverError};
pub use search::{solve, solve_state_with_config, solve_with_config, Algorithm};
pub use solution::Solution;
pub use state::State;
