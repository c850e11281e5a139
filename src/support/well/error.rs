use thiserror::Error;

use super::WellStatus;

/// Errors raised through the well contract.
#[derive(Debug, Error)]
pub enum WellError {
    /// The requested node count cannot form a well.
    #[error("a well needs at least {minimum} nodes, got {requested}")]
    InvalidSize { requested: usize, minimum: usize },

    /// The operation is not allowed in the current lifecycle state.
    #[error("cannot {operation} while the well is {status}")]
    InvalidState {
        operation: &'static str,
        status: WellStatus,
    },

    #[error("node {index} is out of range for a well with {len} nodes")]
    IndexOutOfRange { index: usize, len: usize },

    /// A flow vector does not have one entry per node.
    #[error("{phase} flow vector has {actual} entries, expected {expected}")]
    FlowLength {
        phase: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A coordinate line could not be parsed.
    #[error("coordinates line {line}: {reason}")]
    Coordinates { line: usize, reason: String },

    #[error("expected {expected} coordinate lines, found {found}")]
    CoordinateCount { expected: usize, found: usize },

    #[error("failed to read coordinates")]
    Io(#[from] std::io::Error),

    /// The radius is not strictly positive.
    #[error("well radius must be strictly positive, got {0} m")]
    Radius(f64),

    /// The concrete solver failed.
    #[error("solve failed: {context}")]
    Solve {
        /// Where the solve failed, such as the node being computed.
        context: String,

        /// Underlying solver error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl WellError {
    /// Creates a solve failure with context.
    pub fn solve_failed(
        context: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Solve {
            context: context.into(),
            source: Box::new(err),
        }
    }
}
