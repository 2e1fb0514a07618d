//! The result of a finished search: the action sequence, its cost trace,
//! and the run's statistics.

use std::fs;
use std::io;
use std::path::Path;

use crate::board::{Board, Direction};
use crate::state::State;

/// A completed search's output: the path taken, its cumulative cost at
/// every step, and the statistics gathered along the way.
///
/// Called `Solution` rather than `Result` (the distilled spec's name for it)
/// to avoid shadowing [`std::result::Result`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Which algorithm produced this solution (`"BFS"`, `"DFS"`, `"UCS"`, `"A*"`).
    pub algorithm_name: &'static str,
    /// The walk/push labels, in order.
    pub action_sequence: String,
    /// Number of actions in `action_sequence`.
    pub steps: usize,
    /// The final cumulative cost; `cost_steps.last()` when non-empty, else 0.
    pub total_cost: u32,
    /// Cumulative cost after each action prefix. Empty iff `action_sequence` is empty.
    pub cost_steps: Vec<u32>,
    /// How many states the engine popped from its frontier.
    pub nodes_expanded: usize,
    /// Wall-clock time spent inside the engine's `run`.
    pub elapsed_ms: f64,
    /// Peak resident-set size observed during the run, in megabytes.
    pub peak_memory_mb: f64,
}

impl Solution {
    /// Renders the bit-exact 3-line record described in the external
    /// interface spec:
    ///
    /// ```text
    /// <ALGORITHM>
    /// Steps: <int>, Cost: <int>, Node: <int>, Time (ms): <float>, Memory (MB): <float>
    /// <action_sequence>
    /// ```
    pub fn format_record(&self) -> String {
        format!(
            "{}\nSteps: {}, Cost: {}, Node: {}, Time (ms): {}, Memory (MB): {}\n{}\n",
            self.algorithm_name,
            self.steps,
            self.total_cost,
            self.nodes_expanded,
            self.elapsed_ms,
            self.peak_memory_mb,
            self.action_sequence
        )
    }
}

/// Appends `solution`'s record to the file at `path`, creating it (and any
/// parent directories) if needed.
///
/// Unless `duplicate` is set, any existing 3-line record for the same
/// `algorithm_name` is dropped before the new one is appended, mirroring the
/// reference implementation's `Result.save`. This lives in the core because
/// the output format is bit-exact and part of the external interface; the
/// richer human-facing presentation of a result stays a collaborator's job.
pub fn append_record(path: impl AsRef<Path>, solution: &Solution, duplicate: bool) -> io::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    if !duplicate && path.exists() {
        let existing = fs::read_to_string(path)?;
        let lines: Vec<&str> = existing.lines().collect();
        let kept: String = lines
            .chunks(3)
            .filter(|chunk| chunk.first() != Some(&solution.algorithm_name))
            .flat_map(|chunk| chunk.iter().map(|l| *l))
            .collect::<Vec<_>>()
            .join("\n");
        let mut kept = kept;
        if !kept.is_empty() {
            kept.push('\n');
        }
        fs::write(path, kept)?;
    }

    let mut existing = if path.exists() {
        fs::read_to_string(path)?
    } else {
        String::new()
    };
    existing.push_str(&solution.format_record());
    fs::write(path, existing)
}

/// Replays `action_sequence` against the puzzle's initial layout to compute
/// the authoritative cost trace, per the "single source of truth" design
/// noted in the successor function: per-transition costs looked up during
/// search are never trusted for the final totals, only this replay is.
pub fn replay_cost_trace(board: &Board, initial: &State, action_sequence: &str) -> Vec<u32> {
    let mut agent = initial.agent();
    let mut stones = initial.stones().to_vec();
    let mut total = 0u32;
    let mut steps = Vec::with_capacity(action_sequence.len());

    for ch in action_sequence.chars() {
        let direction = direction_for(ch);
        let is_push = ch.is_ascii_uppercase();

        let next_agent = direction
            .offset(agent)
            .expect("a replayed action can never walk off the grid's origin edge");

        if is_push {
            let stone_index = stones
                .iter()
                .position(|&s| s == next_agent)
                .expect("a replayed push action must find a stone ahead of the agent");
            let beyond = direction
                .offset(stones[stone_index])
                .expect("a replayed push action can never push a stone off the grid's origin edge");
            stones[stone_index] = beyond;
            total += 1 + board.weight(stone_index);
        } else {
            total += 1;
        }

        agent = next_agent;
        steps.push(total);
    }

    steps
}

fn direction_for(label: char) -> Direction {
    match label.to_ascii_lowercase() {
        'u' => Direction::Up,
        'l' => Direction::Left,
        'd' => Direction::Down,
        'r' => Direction::Right,
        other => panic!("not a valid action label: {other:?}"),
    }
}
