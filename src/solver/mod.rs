//! Guess-narrowing and candidate selection
//!
//! Constraint filtering, the positional frequency model, candidate scoring,
//! guess strategies and the per-game session that drives them.

mod constraints;
mod error;
mod frequency;
pub mod scorer;
pub mod session;
pub mod strategy;

pub use constraints::{ConstraintSet, PositionConstraint};
pub use error::SolverError;
pub use frequency::{FrequencyTable, LetterCount};
pub use scorer::{pick_best_candidate, rank_candidates, score_word};
pub use session::{GameSession, RoundOutcome, SessionConfig, SessionState, rng_from_seed};
pub use strategy::{
    DEFAULT_OPENER, FrequencyStrategy, GameMode, RandomStrategy, Strategy, StrategyType,
};
