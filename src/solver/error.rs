//! Solver error type

use thiserror::Error;

/// Errors raised while driving a game session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// The candidate set is empty, so no guess can be proposed
    #[error("no candidate words remain")]
    NoCandidateAvailable,
    #[error("feedback has {found} positions, expected {expected}")]
    FeedbackLength { expected: usize, found: usize },
    #[error("dictionary words must all have {expected} letters, found {word:?}")]
    MixedWordLengths { expected: usize, word: String },
    #[error("game has not started yet")]
    NotStarted,
    #[error("game has already started")]
    AlreadyStarted,
    #[error("game is already over")]
    GameOver,
}
