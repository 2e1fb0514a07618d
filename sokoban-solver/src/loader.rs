//! Parses an input file into an immutable [`Board`] plus the initial
//! [`State`] the search engines start from.

use std::fs;
use std::path::Path;

use log::warn;

use crate::board::{Board, Terrain};
use crate::error::SolverError;
use crate::state::State;

/// Parses the puzzle at `path`, returning the static board and the initial
/// dynamic state, or an [`SolverError::InvalidInput`]/[`SolverError::Io`] if
/// the file doesn't describe a well-formed puzzle.
///
/// Format:
/// - Line 1: whitespace-separated positive integer stone weights.
/// - Remaining lines: the map, over the alphabet `# .$*@+`. Trailing
///   newlines are stripped; trailing spaces are preserved and short rows are
///   right-padded with floor to the longest row's width.
pub fn load(path: impl AsRef<Path>) -> Result<(Board, State), SolverError> {
    let text = fs::read_to_string(path)?;
    parse(&text)
}

/// Same as [`load`], but operating on an already-read string. Exposed so
/// tests can embed fixtures as string literals instead of files on disk.
pub fn parse(text: &str) -> Result<(Board, State), SolverError> {
    let mut lines = text.lines();

    let weight_line = lines
        .next()
        .ok_or_else(|| SolverError::invalid_input("input file is empty"))?;

    let raw_weights: Vec<i64> = weight_line
        .split_whitespace()
        .map(|tok| {
            tok.parse::<i64>()
                .map_err(|_| SolverError::invalid_input(format!("non-integer weight: {tok:?}")))
        })
        .collect::<Result<_, _>>()?;

    for &w in &raw_weights {
        if w <= 0 {
            return Err(SolverError::invalid_input(format!(
                "stone weight must be positive, got {w}"
            )));
        }
    }
    let weights: Vec<u32> = raw_weights.into_iter().map(|w| w as u32).collect();

    let map_lines: Vec<&str> = lines.collect();
    let max_width = map_lines.iter().map(|l| l.len()).max().unwrap_or(0);

    if max_width > 0 && map_lines.iter().any(|l| l.len() != max_width) {
        warn!(
            "padding {} row(s) to the widest row ({} columns)",
            map_lines.iter().filter(|l| l.len() != max_width).count(),
            max_width
        );
    }

    let mut terrain = Vec::with_capacity(map_lines.len());
    let mut agent: Option<(usize, usize)> = None;
    let mut stones = Vec::new();

    for (r, line) in map_lines.iter().enumerate() {
        let mut row = Vec::with_capacity(max_width);
        let chars: Vec<char> = line.chars().collect();
        for c in 0..max_width {
            let ch = chars.get(c).copied().unwrap_or(' ');
            let cell = match ch {
                '#' => Terrain::Wall,
                '.' | '*' | '+' => Terrain::Switch,
                _ => Terrain::Floor,
            };
            row.push(cell);

            match ch {
                '@' | '+' => {
                    if agent.replace((r, c)).is_some() {
                        return Err(SolverError::invalid_input(
                            "more than one agent cell in the map",
                        ));
                    }
                }
                '$' | '*' => stones.push((r, c)),
                _ => {}
            }
        }
        terrain.push(row);
    }

    let agent = agent.ok_or_else(|| SolverError::invalid_input("no agent cell found in the map"))?;

    if stones.len() != weights.len() {
        return Err(SolverError::invalid_input(format!(
            "found {} stone(s) but {} weight(s) were declared",
            stones.len(),
            weights.len()
        )));
    }

    let board = Board::new(terrain, weights, stones.clone());
    let state = State::new(agent, stones);

    Ok((board, state))
}
