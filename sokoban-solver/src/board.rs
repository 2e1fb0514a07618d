//! The static, shared terrain of a puzzle: walls, floor, switches, and the
//! weight table for whichever stones the [`loader`](crate::loader) found.

use std::collections::HashSet;

/// A single grid cell's fixed kind. Never changes over the course of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Terrain {
    /// Impassable; neither the agent nor a stone may ever occupy it.
    Wall,
    /// Plain ground.
    Floor,
    /// A target cell. The puzzle is solved once every stone rests on one.
    Switch,
}

/// A single grid coordinate, `(row, col)`, zero-indexed from the top-left.
pub type Pos = (usize, usize);

/// The four cardinal directions a push or walk can take, in the fixed
/// enumeration order `U, L, D, R` the successor function relies on for
/// deterministic tie-breaking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Up, i.e. row - 1.
    Up,
    /// Left, i.e. col - 1.
    Left,
    /// Down, i.e. row + 1.
    Down,
    /// Right, i.e. col + 1.
    Right,
}

impl Direction {
    /// All four directions in the order the successor function emits them.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    /// The lowercase walk label for this direction.
    pub const fn walk_label(self) -> char {
        match self {
            Direction::Up => 'u',
            Direction::Left => 'l',
            Direction::Down => 'd',
            Direction::Right => 'r',
        }
    }

    /// The uppercase push label for this direction.
    pub const fn push_label(self) -> char {
        self.walk_label().to_ascii_uppercase()
    }

    /// Applies this direction to a position, returning `None` if it would
    /// walk off the top or left edge (rows/cols are `usize`, so there is no
    /// negative coordinate to represent).
    pub fn offset(self, (r, c): Pos) -> Option<Pos> {
        match self {
            Direction::Up => r.checked_sub(1).map(|r| (r, c)),
            Direction::Left => c.checked_sub(1).map(|c| (r, c)),
            Direction::Down => Some((r + 1, c)),
            Direction::Right => Some((r, c + 1)),
        }
    }
}

/// The immutable, shared board a run's search takes place on. Produced once
/// by the [`loader`](crate::loader) and aliased (via plain `&Board` borrows)
/// by the successor function, the deadlock detector, and the heuristic for
/// the remainder of the run.
#[derive(Clone, Debug)]
pub struct Board {
    rows: usize,
    cols: usize,
    terrain: Vec<Vec<Terrain>>,
    switches: HashSet<Pos>,
    /// Weight of stone index `i`, in the order stones were first scanned
    /// (top-to-bottom, left-to-right). Never reordered after loading.
    weights: Vec<u32>,
    /// Stone `i`'s starting position, in the same scan order as `weights`.
    /// This is the anchor the successor function's index-ordered layout is
    /// seeded from, since `State::stones` is always sorted and so cannot
    /// itself recover which initial stone ended up where.
    initial_stones: Vec<Pos>,
}

impl Board {
    pub(crate) fn new(terrain: Vec<Vec<Terrain>>, weights: Vec<u32>, initial_stones: Vec<Pos>) -> Self {
        let rows = terrain.len();
        let cols = terrain.first().map_or(0, Vec::len);
        let switches = terrain
            .iter()
            .enumerate()
            .flat_map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(_, t)| **t == Terrain::Switch)
                    .map(move |(c, _)| (r, c))
            })
            .collect();

        Board {
            rows,
            cols,
            terrain,
            switches,
            weights,
            initial_stones,
        }
    }

    /// Number of rows in the padded rectangle.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the padded rectangle (the longest input row).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The terrain at `pos`. Positions outside the declared rectangle read
    /// as [`Terrain::Wall`] rather than panicking, since the successor
    /// function probes one cell beyond the board edge whenever the agent
    /// or a stone sits on the boundary.
    pub fn terrain(&self, pos: Pos) -> Terrain {
        self.terrain
            .get(pos.0)
            .and_then(|row| row.get(pos.1))
            .copied()
            .unwrap_or(Terrain::Wall)
    }

    /// Whether `pos` is a switch cell.
    pub fn is_switch(&self, pos: Pos) -> bool {
        self.switches.contains(&pos)
    }

    /// All switch cells, in no particular order.
    pub fn switches(&self) -> &HashSet<Pos> {
        &self.switches
    }

    /// The weight of stone `index`, as assigned by the loader.
    pub fn weight(&self, index: usize) -> u32 {
        self.weights[index]
    }

    /// The full weight table, indexed by the stone's scan order in the input file.
    pub fn weights(&self) -> &[u32] {
        &self.weights
    }

    /// Number of stones this board's recipe declares.
    pub fn stone_count(&self) -> usize {
        self.weights.len()
    }

    /// Stone `i`'s position at load time. The successor function seeds its
    /// index-ordered layout from this, since weights are keyed by this same
    /// scan order and that correspondence must survive every push.
    pub fn initial_stones(&self) -> &[Pos] {
        &self.initial_stones
    }
}
