//! A lower-bound estimate of the remaining cost to the goal, used only to
//! order A*'s frontier.

use crate::board::{Board, Pos};
use crate::state::State;

fn manhattan((r1, c1): Pos, (r2, c2): Pos) -> u32 {
    (r1 as i64 - r2 as i64).unsigned_abs() as u32 + (c1 as i64 - c2 as i64).unsigned_abs() as u32
}

/// `sum(weight_i * manhattan(stone_i, nearest switch)) + min(manhattan(agent, stone_i))`.
///
/// Each stone must travel to *some* switch, and each cell it crosses costs
/// at least its own weight; the agent must also close the distance to at
/// least one stone before it can push anything. This is not strictly
/// admissible -- the same switch can be "claimed" by the nearest-switch term
/// of more than one stone -- so it is used purely to order A*'s frontier,
/// never as a basis for an optimality proof.
pub fn estimate(board: &Board, state: &State) -> u32 {
    if state.stones().is_empty() {
        return 0;
    }

    let stone_to_switch: u32 = state
        .stones()
        .iter()
        .enumerate()
        .map(|(i, &stone)| {
            let nearest = board
                .switches()
                .iter()
                .map(|&sw| manhattan(stone, sw))
                .min()
                .unwrap_or(0);
            nearest * board.weight(i)
        })
        .sum();

    let agent_to_nearest_stone = state
        .stones()
        .iter()
        .map(|&stone| manhattan(state.agent(), stone))
        .min()
        .unwrap_or(0);

    stone_to_switch + agent_to_nearest_stone
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse;

    #[test]
    fn zero_at_goal() {
        let (board, _) = parse("3\n#####\n#@*.#\n#####\n").unwrap();
        let goal_state = State::new((1, 1), vec![(1, 3)]);
        assert_eq!(estimate(&board, &goal_state), 0);
    }

    #[test]
    fn weighs_distance_by_stone_weight() {
        let (board, state) = parse("4\n######\n#@ $.#\n######\n").unwrap();
        // stone at (1,3), nearest switch (1,4): distance 1, weight 4 => 4
        // agent at (1,1), stone at (1,3): distance 2
        assert_eq!(estimate(&board, &state), 4 + 2);
    }
}
