//! The single-character action labels that make up a solution sequence.

use crate::board::Direction;

/// A single step the agent takes: either a walk into an empty cell, or a
/// push of a stone one cell further in the same direction.
///
/// The [`Display`](std::fmt::Display) impl produces exactly the character
/// the distilled spec calls the "action label" — lowercase for a walk,
/// uppercase for a push — which is also what [`Action::from_char`] parses
/// back, so `action_sequence` round-trips through plain `char`s without a
/// bespoke encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Moved the agent without displacing a stone.
    Walk(Direction),
    /// Moved the agent and pushed the stone ahead of it one cell further.
    Push(Direction),
}

impl Action {
    /// The direction this action moved in, regardless of whether it pushed.
    pub fn direction(self) -> Direction {
        match self {
            Action::Walk(d) | Action::Push(d) => d,
        }
    }

    /// The action label character: lowercase for a walk, uppercase for a push.
    pub fn label(self) -> char {
        match self {
            Action::Walk(d) => d.walk_label(),
            Action::Push(d) => d.push_label(),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_case_convention() {
        assert_eq!(Action::Walk(Direction::Right).label(), 'r');
        assert_eq!(Action::Push(Direction::Right).label(), 'R');
    }
}
