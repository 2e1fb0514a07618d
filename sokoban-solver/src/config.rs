//! A deliberately small configuration surface: just the two knobs the
//! search loop actually needs from a caller, not a sprawling settings file.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cooperative cancellation flag, checked once per frontier pop. Cloning
/// a token gives you another handle to the same underlying flag, so a
/// caller can hold one end and hand the other to [`solve_with_config`](crate::solve_with_config).
#[derive(Clone, Debug, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    /// A fresh, untripped token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Trips the token. Observable by every clone, including ones already
    /// handed off to a running search.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Whether [`cancel`](Self::cancel) has been called on this token or any of its clones.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Tuning knobs for a single [`solve_with_config`](crate::solve_with_config) call.
///
/// `solve()` is sugar for `solve_with_config` with `SolveConfig::default()`.
#[derive(Clone, Debug, Default)]
pub struct SolveConfig {
    /// If set, the search reports [`SolverError::SearchExhausted`](crate::error::SolverError::SearchExhausted)
    /// once this many nodes have been expanded, rather than running
    /// unbounded until the frontier empties.
    pub max_nodes: Option<usize>,
    /// If set, the search checks this token on every frontier pop and
    /// returns [`SolverError::Cancelled`](crate::error::SolverError::Cancelled) once it trips.
    pub cancellation: Option<CancellationToken>,
}
