// Errors reported by the puzzle engine.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A puzzle's adjacency declaration does not describe a valid puzzle.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// An externally supplied state is missing facelets or uses unknown colors.
    #[error("invalid state: {0}")]
    InvalidState(String),

    #[error("invalid move notation: {0}")]
    Notation(String),

    #[error("unknown puzzle: {0}")]
    UnknownPuzzle(String),

    #[error("unsolvable or search exhausted after {explored} nodes (depth {depth})")]
    UnsolvableOrExhausted { explored: usize, depth: usize },

    #[error("search cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, EngineError>;
