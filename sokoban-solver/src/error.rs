//! The error taxonomy shared by the loader and the search engines.

use thiserror::Error;

/// The statistics a search engine had gathered at the point it gave up,
/// attached to every search-time error variant so a caller can still report
/// "how far did it get" even on failure. `action_sequence` is always empty
/// and `total_cost` is always 0 in that case -- only these three numbers
/// survive.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PartialStats {
    /// How many nodes had been popped from the frontier.
    pub nodes_expanded: usize,
    /// Wall-clock time spent before giving up.
    pub elapsed_ms: f64,
    /// Peak resident memory observed before giving up, in megabytes.
    pub peak_memory_mb: f64,
}

/// Everything that can keep [`solve`](crate::solve) from producing a
/// [`Solution`](crate::solution::Solution).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// The input file was missing, empty, malformed, or internally
    /// inconsistent (e.g. the stone count didn't match the weight count).
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// A human-readable explanation of what was wrong with the file.
        reason: String,
    },

    /// The input file could not even be opened or read.
    #[error("could not read input file: {0}")]
    Io(String),

    /// The frontier emptied without ever reaching a goal state.
    #[error("no solution exists for this puzzle ({stats:?})")]
    NoSolution {
        /// Statistics gathered before the frontier ran dry.
        stats: PartialStats,
    },

    /// A configured node cap was hit before a goal state was found.
    #[error("search exhausted its node budget ({stats:?})")]
    SearchExhausted {
        /// Statistics gathered before the cap was hit.
        stats: PartialStats,
    },

    /// The caller's cancellation signal tripped mid-search.
    #[error("search was cancelled ({stats:?})")]
    Cancelled {
        /// Statistics gathered before the cancellation was observed.
        stats: PartialStats,
    },
}

impl SolverError {
    /// Shorthand for building an [`InvalidInput`](SolverError::InvalidInput)
    /// from anything that can become a `String`.
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        SolverError::InvalidInput {
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for SolverError {
    fn from(err: std::io::Error) -> Self {
        SolverError::Io(err.to_string())
    }
}
