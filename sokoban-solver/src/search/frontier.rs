//! The pluggable "frontier discipline" the shared search frame in
//! [`super::run`] is parameterized over: what order states come back out in.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use derivative::Derivative;

use crate::board::Pos;
use crate::state::State;

/// A single pending node: the state itself, its accumulated cost `g`, the
/// monotonically increasing `sequence` it was discovered in (used only to
/// break ties between equal-priority entries in FIFO order), and the
/// index-ordered stone `layout` that produced this `state` -- carried along
/// so the next expansion can resolve push weights by original stone index
/// rather than by `state.stones()`'s sorted rank (see
/// [`crate::successor`]).
pub struct Pending {
    pub state: State,
    pub layout: Vec<Pos>,
    pub g: u32,
    pub sequence: u64,
}

/// One of the four ways a search engine can order its pending work. All
/// four share the same outer loop in [`super::run`]; only this trait's
/// implementation differs between BFS, DFS, UCS, and A*.
pub trait Frontier {
    /// Adds a node to the frontier. `priority` is only meaningful to
    /// [`PriorityFrontier`]; the FIFO/LIFO disciplines ignore it.
    fn push(&mut self, pending: Pending, priority: u32);
    /// Removes and returns whichever node this discipline says comes next.
    fn pop(&mut self) -> Option<Pending>;
    /// Whether the frontier currently holds no nodes.
    fn is_empty(&self) -> bool;
}

/// BFS: first in, first out. Since every edge in this graph has the same
/// "one step" notion of depth regardless of its dollar cost, FIFO order
/// visits states in non-decreasing depth, which is what makes BFS optimal
/// in *action count* even though it ignores the cost-trace entirely.
#[derive(Default)]
pub struct FifoFrontier(VecDeque<Pending>);

impl Frontier for FifoFrontier {
    fn push(&mut self, pending: Pending, _priority: u32) {
        self.0.push_back(pending);
    }

    fn pop(&mut self) -> Option<Pending> {
        self.0.pop_front()
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// DFS: last in, first out. Combined with the successor function's fixed
/// `U, L, D, R` push order, the pop order comes out `R, D, L, U`.
#[derive(Default)]
pub struct LifoFrontier(Vec<Pending>);

impl Frontier for LifoFrontier {
    fn push(&mut self, pending: Pending, _priority: u32) {
        self.0.push(pending);
    }

    fn pop(&mut self) -> Option<Pending> {
        self.0.pop()
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A min-priority-queue entry. Ordered solely by `(priority, sequence)`,
/// both wrapped in [`Reverse`] so a (max-heap) [`BinaryHeap`] pops the
/// smallest priority first and, among equal priorities, the earliest
/// inserted entry first. The attached `pending` payload rides along
/// unordered -- mirroring the teacher crate's pattern of deriving
/// comparisons over a struct while ignoring a field that isn't part of its
/// identity.
#[derive(Derivative)]
#[derivative(PartialEq, Eq, PartialOrd, Ord)]
struct QueueEntry {
    key: Reverse<(u32, u64)>,
    #[derivative(PartialEq = "ignore", PartialOrd = "ignore", Ord = "ignore")]
    pending: Pending,
}

/// UCS and A* share this container; they differ only in what priority they
/// push a node at (`g` alone for UCS, `g + h` for A*), which [`super::run`]
/// decides via the heuristic closure it's given before calling [`Frontier::push`].
#[derive(Default)]
pub struct PriorityFrontier(BinaryHeap<QueueEntry>);

impl Frontier for PriorityFrontier {
    fn push(&mut self, pending: Pending, priority: u32) {
        let sequence = pending.sequence;
        self.0.push(QueueEntry {
            key: Reverse((priority, sequence)),
            pending,
        });
    }

    fn pop(&mut self) -> Option<Pending> {
        self.0.pop().map(|entry| entry.pending)
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
